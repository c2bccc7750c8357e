//! High-level facade crate for `marker-points`.
//!
//! This crate provides:
//! - re-exports of the image-agnostic core (`marker-points-core`)
//! - (feature-gated) end-to-end helpers that decode an image file with the
//!   `image` crate and run the exact-color marker scan on it
//! - a JSON report type
//! - (feature `cli`) the `marker-points` command-line tool
//!
//! ## Quickstart
//!
//! ```no_run
//! use marker_points::core::{CoordMode, ExtractParams, Rgba};
//! use marker_points::extract;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = ExtractParams::new(CoordMode::Gl).with_target(Rgba::from_hex("ff00ff")?);
//! for marker in extract::extract_from_path("face.png", &params)? {
//!     println!("{}", marker.point);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinate modes
//! - `gl`: origin at the image center, y up, `x, y, 0.0` per line.
//! - `img`: origin at the top-left pixel, y down, `x, y` per line.

pub use marker_points_core as core;

pub use marker_points_core::{
    extract_markers, extract_points, CoordMode, ExtractParams, MarkerPoint, NormalizedPoint,
    Rgba, RgbaImageView,
};

pub mod report;

#[cfg(feature = "image")]
pub mod extract;

pub use report::{ExtractReport, ReportError};
