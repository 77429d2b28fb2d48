// SPDX-License-Identifier: GPL-3.0-or-later
// src/error.rs
//
// Error type shared by the selection core, the exporter and configuration.

use thiserror::Error;

/// Errors reported by the crop selection library.
///
/// Geometry itself never fails: clamping is silent and reads on an inactive
/// selection return `None`. Errors are reserved for configuration that cannot
/// be honoured and for exports that have nothing to export.
#[derive(Error, Debug)]
pub enum CropError {
    /// Aspect ratio string is not of the form `W:H` with positive integers.
    #[error("Invalid aspect ratio '{value}': {reason}")]
    InvalidAspectRatio {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A configuration option is out of range.
    #[error("Invalid configuration for '{option}': {reason}")]
    InvalidConfiguration {
        /// Name of the offending option.
        option: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// An export was requested but no selection is active.
    #[error("No active selection")]
    InactiveSelection,

    /// An export was requested before any image was set.
    #[error("No image loaded")]
    NoImage,

    /// Image decoding or encoding failed.
    #[cfg(feature = "image")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for `CropperConfig`.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl CropError {
    pub(crate) fn invalid_config(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            option,
            reason: reason.into(),
        }
    }

    /// Check if this error was raised while validating configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAspectRatio { .. }
                | Self::InvalidConfiguration { .. }
                | Self::ConfigParse(_)
        )
    }
}

/// Result type using `CropError`.
pub type Result<T> = std::result::Result<T, CropError>;
