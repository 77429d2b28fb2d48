// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Cropper configuration with JSON file support.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constant::{
    DEFAULT_ASPECT_RATIO, DEFAULT_HANDLE_OFFSET, DEFAULT_HANDLE_WIDTH, DEFAULT_MINIMUM_WIDTH,
};
use crate::domain::geometry::{AspectRatio, parse_aspect_ratio};
use crate::error::{CropError, Result};

/// Options accepted by [`crate::Cropper::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropperConfig {
    /// Locked ratio as `W:H`.
    pub aspect_ratio: String,
    /// Side length of each resize handle hit-box, display pixels.
    pub handle_width: f32,
    /// Hit-box shift along the diagonal; `-handle_width / 2` centres it on the corner.
    pub handle_offset: f32,
    /// Smallest selection width, in source image pixels.
    pub minimum_width: f32,
    /// Image to load on construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            handle_width: DEFAULT_HANDLE_WIDTH,
            handle_offset: DEFAULT_HANDLE_OFFSET,
            minimum_width: DEFAULT_MINIMUM_WIDTH,
            image: None,
        }
    }
}

impl CropperConfig {
    /// Parse from a JSON object; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        log::debug!("Loaded cropper config from {}", path.display());
        Ok(config)
    }

    /// Check option ranges and return the parsed aspect ratio.
    pub fn validate(&self) -> Result<AspectRatio> {
        let ratio = parse_aspect_ratio(&self.aspect_ratio)?;

        if !(self.handle_width.is_finite() && self.handle_width > 0.0) {
            return Err(CropError::invalid_config(
                "handleWidth",
                format!("must be a positive number, got {}", self.handle_width),
            ));
        }
        if !self.handle_offset.is_finite() {
            return Err(CropError::invalid_config(
                "handleOffset",
                format!("must be finite, got {}", self.handle_offset),
            ));
        }
        if !(self.minimum_width.is_finite() && self.minimum_width > 0.0) {
            return Err(CropError::invalid_config(
                "minimumWidth",
                format!("must be a positive number, got {}", self.minimum_width),
            ));
        }

        Ok(ratio)
    }
}
