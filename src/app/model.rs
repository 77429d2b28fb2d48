// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Cropper state: the selection controller plus the image it is drawn over.

#[cfg(feature = "image")]
use std::path::Path;

#[cfg(feature = "image")]
use image::DynamicImage;

use crate::app::input::InputEvent;
use crate::app::message::{CropEvent, SelectionDimensions};
use crate::app::observer::{EventFilter, SubscriptionId};
use crate::app::view::crop::{
    InteractionController, InteractionState, ResizeHandleSet, SelectionRegion,
};
use crate::config::CropperConfig;
#[cfg(feature = "image")]
use crate::domain::document::raster::SourceImage;
use crate::domain::document::operations::{
    CropRegion, DisplayLayout, compute_source_region, fit_to_surface,
};
use crate::domain::geometry::{Region, SurfaceSize, parse_aspect_ratio};
use crate::error::{CropError, Result};

// =============================================================================
// Cropper
// =============================================================================

/// Fixed aspect ratio crop selection over a displayed image.
///
/// Pointer coordinates passed to [`Cropper::handle_event`] are relative to the
/// displayed image, i.e. the host subtracts [`DisplayLayout::offset_x`] and
/// [`DisplayLayout::offset_y`] first.
#[derive(Debug)]
pub struct Cropper {
    controller: InteractionController,
    config: CropperConfig,

    // Host container, before fitting.
    container: SurfaceSize,
    layout: Option<DisplayLayout>,
    source_size: Option<(u32, u32)>,

    #[cfg(feature = "image")]
    source: Option<SourceImage>,
}

impl Cropper {
    /// Validate `config` and build a cropper for a host of size `surface`.
    pub fn new(surface: SurfaceSize, config: CropperConfig) -> Result<Self> {
        let ratio = config.validate()?;
        if surface.is_empty() {
            return Err(CropError::invalid_config(
                "surface",
                format!("{}x{} has no area", surface.width, surface.height),
            ));
        }

        let handles = ResizeHandleSet::new(config.handle_width, config.handle_offset);
        let mut region = SelectionRegion::new(surface, ratio, 0.0, handles);
        region.set_minimum_width(config.minimum_width, 1.0);

        let mut cropper = Self {
            controller: InteractionController::new(region),
            config,
            container: surface,
            layout: None,
            source_size: None,
            #[cfg(feature = "image")]
            source: None,
        };

        cropper.load_configured_image()?;

        log::debug!(
            "Cropper created: surface {}x{}, ratio {}",
            surface.width,
            surface.height,
            ratio
        );
        Ok(cropper)
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn region(&self) -> &SelectionRegion {
        self.controller.region()
    }

    pub fn state(&self) -> InteractionState {
        self.controller.state()
    }

    pub fn layout(&self) -> Option<DisplayLayout> {
        self.layout
    }

    // =========================================================================
    // Image
    // =========================================================================

    /// Register a source image by its native size.
    ///
    /// Clears the selection, fits the image into the container and re-applies
    /// the minimum width in display units.
    pub fn set_source_dimensions(&mut self, width: u32, height: u32) -> Result<DisplayLayout> {
        #[cfg(feature = "image")]
        {
            self.source = None;
        }
        self.apply_source_dimensions(width, height)
    }

    #[cfg(feature = "image")]
    pub fn set_image(&mut self, image: DynamicImage) -> Result<DisplayLayout> {
        let source = SourceImage::new(image);
        let (width, height) = source.dimensions();
        let layout = self.apply_source_dimensions(width, height)?;
        self.source = Some(source);
        Ok(layout)
    }

    #[cfg(feature = "image")]
    pub fn open_image(&mut self, path: &Path) -> Result<DisplayLayout> {
        let source = SourceImage::open(path)?;
        let (width, height) = source.dimensions();
        let layout = self.apply_source_dimensions(width, height)?;
        self.source = Some(source);
        Ok(layout)
    }

    #[cfg(feature = "image")]
    fn load_configured_image(&mut self) -> Result<()> {
        if let Some(path) = self.config.image.clone() {
            self.open_image(&path)?;
        }
        Ok(())
    }

    #[cfg(not(feature = "image"))]
    fn load_configured_image(&mut self) -> Result<()> {
        if let Some(path) = &self.config.image {
            log::warn!(
                "Ignoring image {} (built without the image feature)",
                path.display()
            );
        }
        Ok(())
    }

    fn apply_source_dimensions(&mut self, width: u32, height: u32) -> Result<DisplayLayout> {
        let layout = fit_to_surface(self.container, (width, height))?;

        self.controller.clear_selection();
        let region = self.controller.region_mut();
        region.set_surface(layout.surface());
        region.set_minimum_width(self.config.minimum_width, layout.scale_factor);

        self.layout = Some(layout);
        self.source_size = Some((width, height));

        log::debug!(
            "Image {width}x{height} displayed at {:.1}x{:.1} (scale {:.3})",
            layout.width,
            layout.height,
            layout.scale_factor
        );
        self.controller
            .region()
            .publish(CropEvent::ImageLoaded(layout));
        Ok(layout)
    }

    /// Source pixels per display pixel; 1 before an image is set.
    pub fn scale_factor(&self) -> f32 {
        self.layout.map_or(1.0, |layout| layout.scale_factor)
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Parse and apply `W:H`, redrawing an active selection under the new ratio.
    pub fn set_aspect_ratio(&mut self, value: &str) -> Result<()> {
        let ratio = parse_aspect_ratio(value)?;
        self.config.aspect_ratio = value.to_string();
        self.controller.set_aspect_ratio(ratio);
        Ok(())
    }

    /// `source_width` is in source image pixels.
    pub fn set_minimum_width(&mut self, source_width: f32) -> Result<()> {
        if !(source_width.is_finite() && source_width > 0.0) {
            return Err(CropError::invalid_config(
                "minimumWidth",
                format!("must be a positive number, got {source_width}"),
            ));
        }
        self.config.minimum_width = source_width;
        let factor = self.scale_factor();
        self.controller
            .region_mut()
            .set_minimum_width(source_width, factor);
        Ok(())
    }

    /// Resize every handle hit-box, redrawing handles that are on screen.
    pub fn set_handle_width(&mut self, width: f32) -> Result<()> {
        if !(width.is_finite() && width > 0.0) {
            return Err(CropError::invalid_config(
                "handleWidth",
                format!("must be a positive number, got {width}"),
            ));
        }
        self.config.handle_width = width;
        self.controller.region_mut().handles_mut().set_width(width);
        self.redraw_handles();
        Ok(())
    }

    /// Shift every handle hit-box along its diagonal.
    pub fn set_handle_offset(&mut self, offset: f32) -> Result<()> {
        if !offset.is_finite() {
            return Err(CropError::invalid_config(
                "handleOffset",
                format!("must be finite, got {offset}"),
            ));
        }
        self.config.handle_offset = offset;
        self.controller.region_mut().handles_mut().set_offset(offset);
        self.redraw_handles();
        Ok(())
    }

    fn redraw_handles(&mut self) {
        let region = self.controller.region_mut();
        if region.handles().is_placed() {
            region.draw_handles();
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn handle_event(&mut self, event: impl Into<InputEvent>) {
        self.controller.handle_event(event.into());
    }

    pub fn clear_selection(&mut self) {
        self.controller.clear_selection();
    }

    /// Committed selection in display space.
    pub fn selection(&self) -> Option<SelectionDimensions> {
        self.region().dimensions()
    }

    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&CropEvent) + 'static,
    {
        self.controller
            .region_mut()
            .events_mut()
            .subscribe(filter, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.controller.region_mut().events_mut().unsubscribe(id)
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Selection mapped into source image space, unrounded.
    pub fn source_region(&self) -> Option<Region> {
        let bounds = self.region().bounds()?;
        Some(compute_source_region(&bounds, self.scale_factor()))
    }

    /// Selection in whole source pixels, clamped to the image.
    pub fn crop_region(&self) -> Option<CropRegion> {
        let size = self.source_size?;
        CropRegion::from_region(self.source_region()?, size)
    }

    /// Extract the selected pixels from the full-size image.
    #[cfg(feature = "image")]
    pub fn cropped_image(&self) -> Result<DynamicImage> {
        let source = self.source.as_ref().ok_or(CropError::NoImage)?;
        let region = self.crop_region().ok_or(CropError::InactiveSelection)?;
        Ok(source.crop(region))
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Stop reacting to input and drop every subscription.
    pub fn destroy(&mut self) {
        self.controller.dispose();
        self.controller.region_mut().events_mut().clear();
        log::debug!("Cropper destroyed");
    }
}
