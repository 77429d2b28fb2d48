// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/handle.rs
//
// Corner resize handles: hit-boxes, cursor hints and draw requests.

use serde::Serialize;

use crate::app::message::HandleDraw;
use crate::domain::geometry::{Point, Rectangle, point_in_rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Corner {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "se")]
    SouthEast,
}

impl Corner {
    /// Hit-test order; the first match wins.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    pub fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    /// The matching corner of `bounds`.
    pub fn point_of(self, bounds: &Rectangle) -> Point {
        let x = if self.is_west() { bounds.left } else { bounds.right };
        let y = if self.is_north() { bounds.top } else { bounds.bottom };
        Point::new(x, y)
    }

    pub fn cursor(self) -> CursorHint {
        match self {
            Self::NorthWest | Self::SouthEast => CursorHint::ResizeNwse,
            Self::NorthEast | Self::SouthWest => CursorHint::ResizeNesw,
        }
    }
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorHint {
    #[default]
    Crosshair,
    Move,
    ResizeNwse,
    ResizeNesw,
}

impl CursorHint {
    /// CSS cursor name.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Crosshair => "crosshair",
            Self::Move => "move",
            Self::ResizeNwse => "nwse-resize",
            Self::ResizeNesw => "nesw-resize",
        }
    }
}

// =============================================================================
// ResizeHandle
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    corner: Corner,
    width: f32,
    /// Shifts the hit-box along the diagonal; negative values centre it on the corner.
    offset: f32,
    center: Point,
}

impl ResizeHandle {
    pub fn new(corner: Corner, width: f32, offset: f32) -> Self {
        Self {
            corner,
            width,
            offset,
            center: Point::default(),
        }
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Hit-box limits around the current corner coordinate.
    pub fn bounds(&self) -> Rectangle {
        let Self {
            width,
            offset,
            center,
            ..
        } = *self;

        let (top, bottom) = if self.corner.is_north() {
            (center.y + offset, center.y + width + offset)
        } else {
            (center.y - width - offset, center.y - offset)
        };

        let (left, right) = if self.corner.is_west() {
            (center.x + offset, center.x + width + offset)
        } else {
            (center.x - width - offset, center.x - offset)
        };

        Rectangle::new(top, left, bottom, right)
    }

    pub fn contains(&self, point: Point) -> bool {
        point_in_rectangle(point, &self.bounds())
    }

    fn draw_request(&self) -> HandleDraw {
        let bounds = self.bounds();
        HandleDraw {
            corner: self.corner,
            width: self.width,
            height: self.width,
            top: bounds.top,
            left: bounds.left,
            bottom: bounds.bottom,
            right: bounds.right,
        }
    }
}

// =============================================================================
// ResizeHandleSet
// =============================================================================

/// The four corner handles, in NW, NE, SW, SE order.
#[derive(Debug, Clone)]
pub struct ResizeHandleSet {
    handles: [ResizeHandle; 4],
    /// Handles only have a position once they have been drawn.
    placed: bool,
}

impl ResizeHandleSet {
    pub fn new(width: f32, offset: f32) -> Self {
        Self {
            handles: Corner::ALL.map(|corner| ResizeHandle::new(corner, width, offset)),
            placed: false,
        }
    }

    /// First handle containing `point`, if any.
    pub fn find_handle_at_coord(&self, point: Point) -> Option<Corner> {
        if !self.placed {
            return None;
        }
        self.handles
            .iter()
            .find(|handle| handle.contains(point))
            .map(ResizeHandle::corner)
    }

    pub fn handle(&self, corner: Corner) -> &ResizeHandle {
        &self.handles[corner.index()]
    }

    pub fn set_width(&mut self, width: f32) {
        self.handles.iter_mut().for_each(|h| h.set_width(width));
    }

    /// 0 keeps the hit-box inside the selection; `-width / 2` centres it on the corner.
    pub fn set_offset(&mut self, offset: f32) {
        self.handles.iter_mut().for_each(|h| h.set_offset(offset));
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Position every handle on the matching corner of `bounds` and return
    /// one draw request per handle.
    pub fn draw_handles(&mut self, bounds: &Rectangle) -> [HandleDraw; 4] {
        for handle in &mut self.handles {
            handle.set_center(handle.corner().point_of(bounds));
        }
        self.placed = true;
        self.handles.map(|handle| handle.draw_request())
    }

    /// Forget handle positions (selection cleared).
    pub fn reset(&mut self) {
        self.placed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_set(width: f32, offset: f32, bounds: Rectangle) -> ResizeHandleSet {
        let mut set = ResizeHandleSet::new(width, offset);
        set.draw_handles(&bounds);
        set
    }

    #[test]
    fn test_handle_bounds_per_corner() {
        let bounds = Rectangle::new(100.0, 100.0, 150.0, 150.0);
        let set = placed_set(16.0, 0.0, bounds);

        assert_eq!(
            set.handle(Corner::NorthWest).bounds(),
            Rectangle::new(100.0, 100.0, 116.0, 116.0)
        );
        assert_eq!(
            set.handle(Corner::NorthEast).bounds(),
            Rectangle::new(100.0, 134.0, 116.0, 150.0)
        );
        assert_eq!(
            set.handle(Corner::SouthWest).bounds(),
            Rectangle::new(134.0, 100.0, 150.0, 116.0)
        );
        assert_eq!(
            set.handle(Corner::SouthEast).bounds(),
            Rectangle::new(134.0, 134.0, 150.0, 150.0)
        );
    }

    #[test]
    fn test_negative_offset_centres_on_corner() {
        let bounds = Rectangle::new(100.0, 100.0, 150.0, 150.0);
        let set = placed_set(16.0, -8.0, bounds);

        assert_eq!(
            set.handle(Corner::NorthWest).bounds(),
            Rectangle::new(92.0, 92.0, 108.0, 108.0)
        );
        assert_eq!(
            set.handle(Corner::SouthEast).bounds(),
            Rectangle::new(142.0, 142.0, 158.0, 158.0)
        );
    }

    #[test]
    fn test_find_handle_strict_interior() {
        let bounds = Rectangle::new(100.0, 100.0, 150.0, 150.0);
        let set = placed_set(16.0, 0.0, bounds);

        assert_eq!(set.find_handle_at_coord(Point::new(105.0, 105.0)), Some(Corner::NorthWest));
        assert_eq!(set.find_handle_at_coord(Point::new(145.0, 105.0)), Some(Corner::NorthEast));
        assert_eq!(set.find_handle_at_coord(Point::new(105.0, 145.0)), Some(Corner::SouthWest));
        assert_eq!(set.find_handle_at_coord(Point::new(145.0, 145.0)), Some(Corner::SouthEast));

        // On the hit-box edge.
        assert_eq!(set.find_handle_at_coord(Point::new(116.0, 105.0)), None);
        assert_eq!(set.find_handle_at_coord(Point::new(150.0, 145.0)), None);
        // Selection body.
        assert_eq!(set.find_handle_at_coord(Point::new(125.0, 125.0)), None);
    }

    #[test]
    fn test_overlapping_handles_prefer_north_west() {
        let bounds = Rectangle::new(100.0, 100.0, 104.0, 104.0);
        let set = placed_set(16.0, 0.0, bounds);

        assert_eq!(set.find_handle_at_coord(Point::new(102.0, 102.0)), Some(Corner::NorthWest));
    }

    #[test]
    fn test_unplaced_handles_never_hit() {
        let set = ResizeHandleSet::new(16.0, 0.0);
        assert_eq!(set.find_handle_at_coord(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_draw_requests() {
        let bounds = Rectangle::new(10.0, 20.0, 60.0, 70.0);
        let mut set = ResizeHandleSet::new(12.0, 0.0);
        let requests = set.draw_handles(&bounds);

        assert_eq!(requests.map(|r| r.corner), Corner::ALL);
        let se = requests[3];
        assert_eq!((se.width, se.height), (12.0, 12.0));
        assert_eq!((se.top, se.left, se.bottom, se.right), (48.0, 58.0, 60.0, 70.0));
    }

    #[test]
    fn test_resize_placed_handles() {
        let bounds = Rectangle::new(100.0, 100.0, 150.0, 150.0);
        let mut set = placed_set(16.0, 0.0, bounds);

        set.set_width(20.0);
        set.set_offset(-10.0);

        let se = set.handle(Corner::SouthEast);
        assert_eq!(se.width(), 20.0);
        assert_eq!(se.bounds(), Rectangle::new(140.0, 140.0, 160.0, 160.0));
        assert_eq!(set.find_handle_at_coord(Point::new(155.0, 155.0)), Some(Corner::SouthEast));
    }

    #[test]
    fn test_cursor_per_corner() {
        assert_eq!(Corner::NorthWest.cursor(), CursorHint::ResizeNwse);
        assert_eq!(Corner::SouthEast.cursor(), CursorHint::ResizeNwse);
        assert_eq!(Corner::NorthEast.cursor(), CursorHint::ResizeNesw);
        assert_eq!(Corner::SouthWest.cursor().as_css(), "nesw-resize");
    }
}
