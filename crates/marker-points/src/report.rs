//! JSON report for one extraction run.

use crate::core::{ExtractParams, MarkerPoint};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Everything needed to reproduce and consume one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractReport {
    pub image_path: String,
    pub width: usize,
    pub height: usize,
    pub params: ExtractParams,
    pub num_points: usize,
    /// Matches in scan order.
    pub points: Vec<MarkerPoint>,
}

impl ExtractReport {
    pub fn new(
        image_path: impl Into<String>,
        width: usize,
        height: usize,
        params: ExtractParams,
        points: Vec<MarkerPoint>,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            width,
            height,
            params,
            num_points: points.len(),
            points,
        }
    }

    pub fn to_json_string(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
