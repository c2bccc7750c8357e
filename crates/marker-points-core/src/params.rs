use serde::{Deserialize, Serialize};

use crate::{CoordMode, Rgba};

/// What to look for and how to report it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractParams {
    #[serde(default)]
    pub mode: CoordMode,
    /// Exact color of marker pixels.
    #[serde(default)]
    pub target: Rgba,
}

impl ExtractParams {
    pub fn new(mode: CoordMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: Rgba) -> Self {
        self.target = target;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_gl_and_green() {
        let params = ExtractParams::default();
        assert_eq!(params.mode, CoordMode::Gl);
        assert_eq!(params.target, Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let params: ExtractParams = serde_json::from_str(r#"{"mode":"img"}"#).unwrap();
        assert_eq!(params, ExtractParams::new(CoordMode::Img));
    }
}
