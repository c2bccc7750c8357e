//! Exact-color marker scan.
//!
//! Every iterator here walks the image once in row-major order (`y` outer,
//! `x` inner) and yields matches lazily, so the output order is always
//! ascending `y` then ascending `x`.

use std::iter::Enumerate;
use std::slice::ChunksExact;

use crate::image::RGBA_CHANNELS;
use crate::{
    CoordMode, ExtractParams, MarkerPoint, NormalizedPoint, PixelCoords, Rgba, RgbaImageView,
};

/// Pixels whose color equals the target on all four channels.
#[derive(Clone, Debug)]
pub struct MatchingPixels<'a> {
    pixels: Enumerate<ChunksExact<'a, u8>>,
    width: usize,
    target: [u8; 4],
}

impl<'a> MatchingPixels<'a> {
    fn new(view: &RgbaImageView<'a>, target: Rgba) -> Self {
        log::debug!(
            "scanning {}x{} image for {}",
            view.width,
            view.height,
            target
        );
        // `width` is a divisor in `next`.
        let data = if view.is_empty() { &[][..] } else { view.data };
        Self {
            pixels: data.chunks_exact(RGBA_CHANNELS).enumerate(),
            width: view.width,
            target: target.to_array(),
        }
    }
}

impl Iterator for MatchingPixels<'_> {
    type Item = PixelCoords;

    fn next(&mut self) -> Option<PixelCoords> {
        let target = self.target;
        let width = self.width;
        self.pixels
            .find(|(_, px)| *px == target)
            .map(|(i, _)| PixelCoords {
                x: i % width,
                y: i / width,
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pixels.size_hint().1)
    }
}

/// Matched pixels mapped into a [`CoordMode`].
#[derive(Clone, Debug)]
pub struct MarkerPoints<'a> {
    pixels: MatchingPixels<'a>,
    mode: CoordMode,
    width: usize,
    height: usize,
}

impl Iterator for MarkerPoints<'_> {
    type Item = MarkerPoint;

    fn next(&mut self) -> Option<MarkerPoint> {
        let pixel = self.pixels.next()?;
        Some(MarkerPoint {
            pixel,
            point: self.mode.normalize(pixel.x, pixel.y, self.width, self.height),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}

/// Normalized positions only; see [`extract_points`].
#[derive(Clone, Debug)]
pub struct PointIter<'a> {
    inner: MarkerPoints<'a>,
}

impl Iterator for PointIter<'_> {
    type Item = NormalizedPoint;

    fn next(&mut self) -> Option<NormalizedPoint> {
        self.inner.next().map(|m| m.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Source coordinates of every pixel exactly equal to `target`.
pub fn find_matching_pixels<'a>(view: &RgbaImageView<'a>, target: Rgba) -> MatchingPixels<'a> {
    MatchingPixels::new(view, target)
}

/// Matched pixels with both their source and normalized coordinates.
pub fn extract_markers<'a>(view: &RgbaImageView<'a>, params: &ExtractParams) -> MarkerPoints<'a> {
    MarkerPoints {
        pixels: MatchingPixels::new(view, params.target),
        mode: params.mode,
        width: view.width,
        height: view.height,
    }
}

/// Normalized coordinates of every pixel exactly equal to `target`.
///
/// The image is never modified. A zero-area image, or one without the
/// target color, yields an empty sequence.
pub fn extract_points<'a>(
    view: &RgbaImageView<'a>,
    mode: CoordMode,
    target: Rgba,
) -> PointIter<'a> {
    PointIter {
        inner: extract_markers(view, &ExtractParams { mode, target }),
    }
}
