// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/fit.rs
//
// Fit a source image inside the host surface (contain, centered).

use serde::Serialize;

use crate::domain::geometry::SurfaceSize;
use crate::error::{CropError, Result};

/// Where and how large the downscaled display copy is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLayout {
    /// Displayed image width; also the width of the selection surface.
    pub width: f32,
    /// Displayed image height.
    pub height: f32,
    /// Horizontal margin centering the image in the container.
    pub offset_x: f32,
    /// Vertical margin centering the image in the container.
    pub offset_y: f32,
    /// `source.width / displayed.width`.
    pub scale_factor: f32,
}

impl DisplayLayout {
    /// Size of the surface pointer coordinates are normalized to.
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }
}

/// Fit `(img_width, img_height)` into `container` keeping its aspect ratio.
///
/// A wider image keeps the container width and is centered vertically; a
/// taller one keeps the container height and is centered horizontally.
pub fn fit_to_surface(
    container: SurfaceSize,
    (img_width, img_height): (u32, u32),
) -> Result<DisplayLayout> {
    if container.is_empty() {
        return Err(CropError::invalid_config(
            "surface",
            format!("{}x{} has no area", container.width, container.height),
        ));
    }
    if img_width == 0 || img_height == 0 {
        return Err(CropError::invalid_config(
            "image",
            format!("{img_width}x{img_height} has no pixels"),
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    let (img_w, img_h) = (img_width as f32, img_height as f32);

    let container_ratio = container.width / container.height;
    let image_ratio = img_w / img_h;

    let mut width = container.width;
    let mut height = container.height;
    let mut offset_x = 0.0;
    let mut offset_y = 0.0;

    if image_ratio > container_ratio {
        height = width / image_ratio;
        offset_y = (container.height - height) / 2.0;
    } else if image_ratio < container_ratio {
        width = height * image_ratio;
        offset_x = (container.width - width) / 2.0;
    }

    Ok(DisplayLayout {
        width,
        height,
        offset_x,
        offset_y,
        scale_factor: img_w / width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::GEOMETRY_EPSILON;

    #[test]
    fn test_wide_image_centered_vertically() {
        let layout = fit_to_surface(SurfaceSize::new(400.0, 400.0), (1600, 800)).unwrap();

        assert_eq!(layout.width, 400.0);
        assert_eq!(layout.height, 200.0);
        assert_eq!(layout.offset_x, 0.0);
        assert_eq!(layout.offset_y, 100.0);
        assert!((layout.scale_factor - 4.0).abs() < GEOMETRY_EPSILON);
    }

    #[test]
    fn test_tall_image_centered_horizontally() {
        let layout = fit_to_surface(SurfaceSize::new(800.0, 600.0), (600, 1200)).unwrap();

        assert_eq!(layout.height, 600.0);
        assert_eq!(layout.width, 300.0);
        assert_eq!(layout.offset_x, 250.0);
        assert_eq!(layout.offset_y, 0.0);
        assert!((layout.scale_factor - 2.0).abs() < GEOMETRY_EPSILON);
    }

    #[test]
    fn test_same_ratio_fills_container() {
        let layout = fit_to_surface(SurfaceSize::new(400.0, 300.0), (1600, 1200)).unwrap();

        assert_eq!(layout.surface(), SurfaceSize::new(400.0, 300.0));
        assert!((layout.scale_factor - 4.0).abs() < GEOMETRY_EPSILON);
    }

    #[test]
    fn test_rejects_empty_inputs() {
        assert!(fit_to_surface(SurfaceSize::new(0.0, 300.0), (10, 10)).is_err());
        assert!(fit_to_surface(SurfaceSize::new(400.0, 300.0), (0, 10)).is_err());
    }
}
