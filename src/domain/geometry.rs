// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Pure geometry: points, rectangles, aspect ratios and rescaling.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CropError, Result};

// =============================================================================
// Point / Rectangle / Region
// =============================================================================

/// A display-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Edge form of a rectangle.
///
/// Values read through `SelectionRegion::bounds` are always normalized
/// (`top <= bottom`, `left <= right`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rectangle {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Rectangle {
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }
}

/// Origin/extent form of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<Rectangle> for Region {
    fn from(rect: Rectangle) -> Self {
        Self::new(rect.left, rect.top, rect.width(), rect.height())
    }
}

/// Width and height of the drawing surface the selection lives on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Returns whether `point` lies strictly inside `rect`.
///
/// Points on an edge count as outside.
pub fn point_in_rectangle(point: Point, rect: &Rectangle) -> bool {
    point.x > rect.left && point.x < rect.right && point.y > rect.top && point.y < rect.bottom
}

/// Multiplies origin and extent by `factor`.
///
/// Maps a display-space region into source-image space when `factor` is the
/// source/display width ratio.
#[must_use]
pub fn rescale(region: Region, factor: f32) -> Region {
    Region::new(
        region.x * factor,
        region.y * factor,
        region.width * factor,
        region.height * factor,
    )
}

/// Parses a `W:H` string into the height/width ratio.
pub fn parse_aspect_ratio(value: &str) -> Result<AspectRatio> {
    value.parse()
}

// =============================================================================
// AspectRatio
// =============================================================================

/// Height divided by width. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio(f32);

impl AspectRatio {
    pub const SQUARE: Self = Self(1.0);

    /// Wraps a raw height/width ratio.
    pub fn new(ratio: f32) -> Result<Self> {
        if ratio.is_finite() && ratio > 0.0 {
            Ok(Self(ratio))
        } else {
            Err(CropError::InvalidAspectRatio {
                value: ratio.to_string(),
                reason: "ratio must be positive and finite".to_string(),
            })
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Height matching `width` under this ratio, keeping the sign of `width`.
    pub fn height_for(self, width: f32) -> f32 {
        width * self.0
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl FromStr for AspectRatio {
    type Err = CropError;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = |reason: &str| CropError::InvalidAspectRatio {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let (w, h) = value
            .split_once(':')
            .ok_or_else(|| invalid("expected the form W:H"))?;

        let w: u32 = w
            .trim()
            .parse()
            .map_err(|_| invalid("width is not an integer"))?;
        let h: u32 = h
            .trim()
            .parse()
            .map_err(|_| invalid("height is not an integer"))?;

        if w == 0 || h == 0 {
            return Err(invalid("both sides must be greater than zero"));
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = h as f32 / w as f32;
        Self::new(ratio)
    }
}
