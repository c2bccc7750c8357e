//! Output coordinate conventions and the normalized point types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digits after the decimal point in the text rendering of a coordinate.
pub const COORD_PRECISION: usize = 5;

/// Which normalized coordinate system matched pixels are mapped into.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordMode {
    /// Origin at the image center, y pointing up, roughly `[-1, 1]` on both axes.
    #[default]
    Gl,
    /// Origin at the top-left pixel, y pointing down, `[0, 1)` on both axes.
    Img,
}

impl CoordMode {
    pub const ALL: [CoordMode; 2] = [CoordMode::Gl, CoordMode::Img];

    pub fn as_str(self) -> &'static str {
        match self {
            CoordMode::Gl => "gl",
            CoordMode::Img => "img",
        }
    }

    /// Map pixel `(x, y)` of a `width x height` image into this convention.
    ///
    /// Division is done in `f64`, never on integers.
    pub fn normalize(self, x: usize, y: usize, width: usize, height: usize) -> NormalizedPoint {
        let (x, y) = (x as f64, y as f64);
        let (w, h) = (width as f64, height as f64);
        match self {
            CoordMode::Gl => {
                let half_w = w / 2.0;
                let half_h = h / 2.0;
                NormalizedPoint::Gl {
                    x: (x - half_w) / half_w,
                    y: (half_h - y) / half_h,
                }
            }
            CoordMode::Img => NormalizedPoint::Img { x: x / w, y: y / h },
        }
    }
}

impl fmt::Display for CoordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordMode {
    type Err = ModeParseError;

    /// Exact, case-sensitive match on `gl` or `img`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gl" => Ok(CoordMode::Gl),
            "img" => Ok(CoordMode::Img),
            other => Err(ModeParseError {
                input: other.to_owned(),
            }),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode {input:?} (expected `gl` or `img`)")]
pub struct ModeParseError {
    pub input: String,
}

/// A matched pixel after normalization.
///
/// `Display` gives the line format consumed downstream: `x, y, 0.0` for GL
/// and `x, y` for IMG, each coordinate with exactly five decimals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum NormalizedPoint {
    Gl { x: f64, y: f64 },
    Img { x: f64, y: f64 },
}

impl NormalizedPoint {
    pub fn mode(&self) -> CoordMode {
        match self {
            NormalizedPoint::Gl { .. } => CoordMode::Gl,
            NormalizedPoint::Img { .. } => CoordMode::Img,
        }
    }

    pub fn x(&self) -> f64 {
        match *self {
            NormalizedPoint::Gl { x, .. } | NormalizedPoint::Img { x, .. } => x,
        }
    }

    pub fn y(&self) -> f64 {
        match *self {
            NormalizedPoint::Gl { y, .. } | NormalizedPoint::Img { y, .. } => y,
        }
    }

    /// Components as emitted: three for GL (z is always 0), two for IMG.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            NormalizedPoint::Gl { x, y } => vec![x, y, 0.0],
            NormalizedPoint::Img { x, y } => vec![x, y],
        }
    }
}

impl fmt::Display for NormalizedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = COORD_PRECISION;
        match *self {
            NormalizedPoint::Gl { x, y } => write!(f, "{x:.p$}, {y:.p$}, 0.0"),
            NormalizedPoint::Img { x, y } => write!(f, "{x:.p$}, {y:.p$}"),
        }
    }
}

/// Integer position of a source pixel.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PixelCoords {
    pub x: usize,
    pub y: usize,
}

/// A matched pixel together with its normalized position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub pixel: PixelCoords,
    pub point: NormalizedPoint,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_modes_case_sensitively() {
        assert_eq!("gl".parse::<CoordMode>(), Ok(CoordMode::Gl));
        assert_eq!("img".parse::<CoordMode>(), Ok(CoordMode::Img));
        assert!("GL".parse::<CoordMode>().is_err());
        assert!(" img".parse::<CoordMode>().is_err());
        assert_eq!(
            "ndc".parse::<CoordMode>().unwrap_err().to_string(),
            "unknown mode \"ndc\" (expected `gl` or `img`)"
        );
    }

    #[test]
    fn gl_maps_corner_and_center() {
        let corner = CoordMode::Gl.normalize(0, 0, 640, 480);
        assert_relative_eq!(corner.x(), -1.0);
        assert_relative_eq!(corner.y(), 1.0);

        let center = CoordMode::Gl.normalize(320, 240, 640, 480);
        assert_eq!(center.to_string(), "0.00000, 0.00000, 0.0");
    }

    #[test]
    fn gl_uses_real_division_for_odd_sizes() {
        // 5x3: half extents 2.5 and 1.5
        let p = CoordMode::Gl.normalize(4, 2, 5, 3);
        assert_relative_eq!(p.x(), 1.5 / 2.5);
        assert_relative_eq!(p.y(), -0.5 / 1.5);
        assert_eq!(p.to_string(), "0.60000, -0.33333, 0.0");
    }

    #[test]
    fn img_maps_origin_and_last_pixel() {
        assert_eq!(
            CoordMode::Img.normalize(0, 0, 7, 9).to_string(),
            "0.00000, 0.00000"
        );
        let last = CoordMode::Img.normalize(3, 3, 4, 4);
        assert_relative_eq!(last.x(), 0.75);
        assert_relative_eq!(last.y(), 0.75);
    }

    #[test]
    fn formats_with_five_decimals() {
        let p = NormalizedPoint::Img { x: 0.5, y: 1.0 / 3.0 };
        assert_eq!(p.to_string(), "0.50000, 0.33333");
        let p = NormalizedPoint::Gl { x: -1.0, y: 0.125 };
        assert_eq!(p.to_string(), "-1.00000, 0.12500, 0.0");
    }

    #[test]
    fn component_vectors_match_mode_arity() {
        assert_eq!(
            NormalizedPoint::Gl { x: 0.5, y: -0.5 }.to_vec(),
            vec![0.5, -0.5, 0.0]
        );
        assert_eq!(NormalizedPoint::Img { x: 0.5, y: 0.25 }.to_vec().len(), 2);
    }

    #[test]
    fn serializes_with_mode_tag() {
        let json = serde_json::to_string(&NormalizedPoint::Img { x: 0.5, y: 0.25 }).unwrap();
        assert_eq!(json, r#"{"mode":"img","x":0.5,"y":0.25}"#);
    }
}
