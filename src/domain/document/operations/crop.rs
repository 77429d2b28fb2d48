// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop operation domain model: display bounds to source pixels.

use serde::Serialize;

use crate::domain::geometry::{Rectangle, Region, rescale};

/// Maps display-space selection bounds into source-image space.
///
/// `scale_factor` is `source.width / displayed.width`.
#[must_use]
pub fn compute_source_region(bounds: &Rectangle, scale_factor: f32) -> Region {
    rescale(Region::from(*bounds), scale_factor)
}

/// Crop region in pixel coordinates.
///
/// Pure domain model - represents a rectangular region to crop.
/// No UI concerns, just data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Round a source-space region to whole pixels inside `(img_width, img_height)`.
    ///
    /// Returns `None` when nothing of the region overlaps the image.
    pub fn from_region(region: Region, (img_width, img_height): (u32, u32)) -> Option<Self> {
        #[allow(clippy::cast_precision_loss)]
        let (max_x, max_y) = (img_width as f32, img_height as f32);

        let left = region.x.round().clamp(0.0, max_x);
        let top = region.y.round().clamp(0.0, max_y);
        let right = (region.x + region.width).round().clamp(0.0, max_x);
        let bottom = (region.y + region.height).round().clamp(0.0, max_y);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let crop = Self::new(
            left as u32,
            top as u32,
            (right - left).max(0.0) as u32,
            (bottom - top).max(0.0) as u32,
        );
        crop.is_valid().then_some(crop)
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
