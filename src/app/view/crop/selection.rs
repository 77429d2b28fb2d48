// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Selection state: anchor pair, aspect-ratio lock, clamping and normalization.

use crate::app::message::{CropEvent, SelectionDimensions, SelectionToolDraw};
use crate::app::observer::EventBus;
use crate::domain::geometry::{AspectRatio, Point, Rectangle, SurfaceSize, point_in_rectangle};

use super::handle::ResizeHandleSet;

/// Comparable view of a selection, used to detect changes between commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionSnapshot {
    pub width: f32,
    pub height: f32,
    pub bounds: Rectangle,
}

/// A fixed aspect ratio selection anchored between two points.
///
/// `fixed` is where the gesture started and `loose` is the corner that
/// follows the pointer. While dragging, `width`/`height` carry the sign of the
/// drag direction; `normalise` rewrites the anchors to top-left/bottom-right
/// once the gesture ends.
#[derive(Debug)]
pub struct SelectionRegion {
    fixed: Option<Point>,
    loose: Option<Point>,
    width: f32,
    height: f32,
    aspect_ratio: AspectRatio,
    /// Display-space units.
    minimum_width: f32,
    surface: SurfaceSize,
    /// Set by every anchor mutation, cleared by `mark_committed`.
    dirty: bool,
    handles: ResizeHandleSet,
    events: EventBus,
}

impl SelectionRegion {
    pub fn new(
        surface: SurfaceSize,
        aspect_ratio: AspectRatio,
        minimum_width: f32,
        handles: ResizeHandleSet,
    ) -> Self {
        Self {
            fixed: None,
            loose: None,
            width: 0.0,
            height: 0.0,
            aspect_ratio,
            minimum_width,
            surface,
            dirty: false,
            handles,
            events: EventBus::new(),
        }
    }

    // =========================================================================
    // Anchors
    // =========================================================================

    /// Anchor at `fixed` and drag the loose corner to `loose`.
    ///
    /// `loose` is re-derived from the aspect ratio and may be clamped.
    pub fn create(&mut self, fixed: Point, loose: Point) {
        self.fixed = Some(fixed);
        self.set_loose_coord(loose);
    }

    /// Start a zero-size selection at `point`.
    pub fn set_fixed_coord(&mut self, point: Point) {
        self.create(point, point);
    }

    /// Move the loose corner towards `point`.
    ///
    /// Only the x extent is taken from the pointer; the y extent follows from
    /// the aspect ratio, in the direction the pointer moved. If the result
    /// runs past the right or bottom edge, the loose corner is pinned to the
    /// edge and the fixed anchor shifts instead, so the size is kept.
    pub fn set_loose_coord(&mut self, point: Point) {
        let Some(mut fixed) = self.fixed else {
            log::trace!("set_loose_coord ignored: selection inactive");
            return;
        };

        let width = point.x - fixed.x;
        let direction = if point.y - fixed.y < 0.0 { -1.0 } else { 1.0 };

        self.width = width;
        self.height = self.aspect_ratio.height_for(width.abs()) * direction;

        let mut loose = Point::new(fixed.x + self.width, fixed.y + self.height);

        if loose.x > self.surface.width {
            loose.x = self.surface.width;
            fixed.x = loose.x - self.width;
        }
        if loose.y > self.surface.height {
            loose.y = self.surface.height;
            fixed.y = loose.y - self.height;
        }

        self.fixed = Some(fixed);
        self.loose = Some(loose);
        self.dirty = true;

        log::trace!(
            "selection fixed=({:.1},{:.1}) loose=({:.1},{:.1}) w={:.1} h={:.1}",
            fixed.x,
            fixed.y,
            loose.x,
            loose.y,
            self.width,
            self.height
        );

        self.draw_selection_tool();
    }

    /// Shift both anchors by `(dx, dy)`.
    pub fn nudge(&mut self, dx: f32, dy: f32) {
        if let (Some(fixed), Some(loose)) = (self.fixed, self.loose) {
            self.create(fixed.offset(dx, dy), loose.offset(dx, dy));
        }
    }

    /// Remove the selection.
    pub fn clear(&mut self) {
        self.fixed = None;
        self.loose = None;
        self.width = 0.0;
        self.height = 0.0;
        self.dirty = false;
        self.handles.reset();
        self.events.publish(&CropEvent::ClearSelection);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn is_active(&self) -> bool {
        self.fixed.is_some() && self.loose.is_some()
    }

    pub fn fixed_coord(&self) -> Option<Point> {
        self.fixed
    }

    pub fn loose_coord(&self) -> Option<Point> {
        self.loose
    }

    /// Signed width; 0 while inactive.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Signed height; 0 while inactive.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn minimum_width(&self) -> f32 {
        self.minimum_width
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Normalized edges, picking fixed or loose per axis by the sign of the
    /// extent. Does not touch the anchors.
    pub fn bounds(&self) -> Option<Rectangle> {
        let (fixed, loose) = (self.fixed?, self.loose?);

        let (top, bottom) = if self.height < 0.0 {
            (loose.y, fixed.y)
        } else {
            (fixed.y, loose.y)
        };
        let (left, right) = if self.width < 0.0 {
            (loose.x, fixed.x)
        } else {
            (fixed.x, loose.x)
        };

        Some(Rectangle::new(top, left, bottom, right))
    }

    /// Strict interior test; always false while inactive.
    pub fn is_coord_within_bounds(&self, point: Point) -> bool {
        self.bounds()
            .is_some_and(|bounds| point_in_rectangle(point, &bounds))
    }

    pub fn snapshot(&self) -> Option<SelectionSnapshot> {
        self.bounds().map(|bounds| SelectionSnapshot {
            width: self.width,
            height: self.height,
            bounds,
        })
    }

    pub fn dimensions(&self) -> Option<SelectionDimensions> {
        self.bounds().map(|b| SelectionDimensions {
            width: self.width,
            height: self.height,
            top: b.top,
            left: b.left,
            bottom: b.bottom,
            right: b.right,
        })
    }

    /// True if the anchors changed since the last commit.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_committed(&mut self) {
        self.dirty = false;
    }

    // =========================================================================
    // Gesture-end cleanup
    // =========================================================================

    /// Grow the selection to `minimum_width` if it is narrower, keeping the
    /// drag direction on both axes.
    pub fn ensure_minimum_size(&mut self) {
        let Some(fixed) = self.fixed else {
            return;
        };
        if self.width.abs() >= self.minimum_width {
            return;
        }

        let width = self.minimum_width.copysign(if self.width < 0.0 { -1.0 } else { 1.0 });
        let height = self
            .aspect_ratio
            .height_for(self.minimum_width)
            .copysign(if self.height < 0.0 { -1.0 } else { 1.0 });

        log::debug!(
            "selection width {:.1} below minimum {:.1}, enlarging",
            self.width.abs(),
            self.minimum_width
        );
        self.set_loose_coord(fixed.offset(width, height));
    }

    /// Rewrite the anchors as top-left/bottom-right with positive extents.
    pub fn normalise(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        self.fixed = Some(bounds.top_left());
        self.loose = Some(bounds.bottom_right());
        self.width = self.width.abs();
        self.height = self.height.abs();
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.aspect_ratio = ratio;
    }

    /// `source_width` is in source-image pixels; it is stored in display units
    /// (`ceil(source_width / scale_factor)`).
    pub fn set_minimum_width(&mut self, source_width: f32, scale_factor: f32) {
        let factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        self.minimum_width = (source_width / factor).ceil();
    }

    pub fn set_surface(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    pub fn handles(&self) -> &ResizeHandleSet {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut ResizeHandleSet {
        &mut self.handles
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub fn publish(&self, event: CropEvent) {
        self.events.publish(&event);
    }

    fn draw_selection_tool(&self) {
        let Some(fixed) = self.fixed else {
            return;
        };
        self.publish(CropEvent::DrawSelectionTool(SelectionToolDraw {
            pos_x: fixed.x,
            pos_y: fixed.y,
            width: self.width,
            height: self.height,
        }));
    }

    /// Publish the committed dimensions: before-selection, selection, a
    /// normalized draw request, after-selection.
    pub fn emit_dimensions(&self) {
        let Some(dimensions) = self.dimensions() else {
            return;
        };
        self.publish(CropEvent::BeforeSelection(dimensions));
        self.publish(CropEvent::Selection(dimensions));
        self.publish(CropEvent::DrawSelectionTool(SelectionToolDraw {
            pos_x: dimensions.left,
            pos_y: dimensions.top,
            width: dimensions.width,
            height: dimensions.height,
        }));
        self.publish(CropEvent::AfterSelection(dimensions));
    }

    /// Place the handles on the current bounds and publish their draw requests.
    pub fn draw_handles(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        for request in self.handles.draw_handles(&bounds) {
            self.events.publish(&CropEvent::DrawHandle(request));
        }
    }
}
