use crate::core::{self, ExtractParams, ImageViewError, MarkerPoint, RgbaImageView};
use image::{ImageReader, RgbaImage};
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::report::ReportError;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("failed to read image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    ImageView(#[from] ImageViewError),

    #[error(transparent)]
    Color(#[from] core::ColorParseError),

    #[error(transparent)]
    Mode(#[from] core::ModeParseError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Borrow an `image::RgbaImage` as the lightweight `marker-points-core` view type.
pub fn rgba_view(img: &RgbaImage) -> RgbaImageView<'_> {
    RgbaImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Wrap a raw RGBA8 buffer, validating its length.
pub fn rgba_view_from_raw(
    width: u32,
    height: u32,
    data: &[u8],
) -> Result<RgbaImageView<'_>, ExtractError> {
    Ok(RgbaImageView::new(width as usize, height as usize, data)?)
}

/// Open and decode an image file, converting it to RGBA8.
///
/// Formats without an alpha channel come back fully opaque.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(path), fields(file = %path.as_ref().display()))
)]
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaImage, ExtractError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    log::info!("loading image {display}");
    let reader = ImageReader::open(path)
        .map_err(|source| ExtractError::Io {
            path: display.clone(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| ExtractError::Io {
            path: display.clone(),
            source,
        })?;
    let img = reader
        .decode()
        .map_err(|source| ExtractError::Decode {
            path: display,
            source,
        })?
        .to_rgba8();
    log::info!("image size {}x{}", img.width(), img.height());
    Ok(img)
}

/// Run the extractor over a decoded image and collect the matches.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn extract_from_image(img: &RgbaImage, params: &ExtractParams) -> Vec<MarkerPoint> {
    let markers: Vec<MarkerPoint> = core::extract_markers(&rgba_view(img), params).collect();
    log::debug!("found {} {} pixels", markers.len(), params.target);
    markers
}

/// Decode an image file and extract its markers end-to-end.
pub fn extract_from_path(
    path: impl AsRef<Path>,
    params: &ExtractParams,
) -> Result<Vec<MarkerPoint>, ExtractError> {
    let img = load_rgba(path)?;
    Ok(extract_from_image(&img, params))
}
