// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Events published by the selection: draw requests and lifecycle signals.

use serde::Serialize;

use crate::app::view::crop::{Corner, CursorHint};
use crate::domain::document::operations::DisplayLayout;
use crate::domain::geometry::Rectangle;

/// Request to draw the selection rectangle.
///
/// During a drag `width`/`height` keep their sign, so `(pos_x, pos_y)` is the
/// fixed anchor and not necessarily the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionToolDraw {
    pub pos_x: f32,
    pub pos_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Request to draw one resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleDraw {
    pub corner: Corner,
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

/// Committed selection: extents plus normalized edges, display space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDimensions {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl SelectionDimensions {
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.top, self.left, self.bottom, self.right)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum CropEvent {
    // Draw requests.
    DrawSelectionTool(SelectionToolDraw),
    DrawHandle(HandleDraw),

    // Selection lifecycle, emitted in this order on commit.
    BeforeSelection(SelectionDimensions),
    Selection(SelectionDimensions),
    AfterSelection(SelectionDimensions),

    // Selection removed.
    ClearSelection,

    // A new source image was fitted to the surface.
    ImageLoaded(DisplayLayout),

    // Pointer cursor should change.
    CursorChanged(CursorHint),
}

/// Payload-free discriminant of [`CropEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DrawSelectionTool,
    DrawHandle,
    BeforeSelection,
    Selection,
    AfterSelection,
    ClearSelection,
    ImageLoaded,
    CursorChanged,
}

impl CropEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::DrawSelectionTool(_) => EventKind::DrawSelectionTool,
            Self::DrawHandle(_) => EventKind::DrawHandle,
            Self::BeforeSelection(_) => EventKind::BeforeSelection,
            Self::Selection(_) => EventKind::Selection,
            Self::AfterSelection(_) => EventKind::AfterSelection,
            Self::ClearSelection => EventKind::ClearSelection,
            Self::ImageLoaded(_) => EventKind::ImageLoaded,
            Self::CursorChanged(_) => EventKind::CursorChanged,
        }
    }
}
