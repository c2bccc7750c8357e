//! Core types and the marker scan for `marker-points`.
//!
//! This crate does *not* depend on any image decoding library. Callers wrap
//! decoded RGBA8 pixels in an [`RgbaImageView`] and run [`extract_points`]
//! (or [`extract_markers`] to keep the source pixel positions).
//!
//! ```
//! use marker_points_core::{extract_points, CoordMode, Rgba, RgbaImageView};
//!
//! let mut data = vec![0u8; 4 * 4 * 4];
//! let i = (1 * 4 + 2) * 4;
//! data[i..i + 4].copy_from_slice(&[0, 255, 0, 255]);
//! let view = RgbaImageView::new(4, 4, &data).unwrap();
//!
//! let lines: Vec<String> = extract_points(&view, CoordMode::Gl, Rgba::DEFAULT_TARGET)
//!     .map(|p| p.to_string())
//!     .collect();
//! assert_eq!(lines, ["0.00000, 0.50000, 0.0"]);
//! ```

mod color;
mod coords;
mod extract;
mod image;
mod logger;
mod params;

pub use color::{ColorParseError, Rgba, MAX_RGB24};
pub use coords::{
    CoordMode, MarkerPoint, ModeParseError, NormalizedPoint, PixelCoords, COORD_PRECISION,
};
pub use extract::{
    extract_markers, extract_points, find_matching_pixels, MarkerPoints, MatchingPixels,
    PointIter,
};
pub use image::{ImageViewError, RgbaImageView, RGBA_CHANNELS};
pub use params::ExtractParams;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_verbosity};
