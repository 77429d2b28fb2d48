// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/raster.rs
//
// Full-resolution source image the crop is extracted from.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};

use super::operations::crop::CropRegion;

/// Represents the decoded full-size image (PNG, JPEG, WebP, ...).
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// The decoded image.
    image: DynamicImage,
}

impl SourceImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Load a source image from disk.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Copy `region` out of the source at 1:1.
    ///
    /// The display copy is never resampled; pixels come straight from the
    /// full-size image.
    pub fn crop(&self, region: CropRegion) -> DynamicImage {
        let (x, y, width, height) = region.as_tuple();
        self.image.crop_imm(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_crop_copies_source_pixels() {
        let mut buffer = RgbaImage::new(8, 8);
        buffer.put_pixel(2, 3, Rgba([255, 0, 0, 255]));
        let source = SourceImage::new(DynamicImage::ImageRgba8(buffer));

        let cropped = source.crop(CropRegion::new(2, 3, 4, 2));

        assert_eq!(cropped.dimensions(), (4, 2));
        assert_eq!(cropped.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(cropped.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
    }
}
