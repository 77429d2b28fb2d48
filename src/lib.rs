// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Fixed aspect ratio crop selection over a displayed image.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
pub mod error;

pub use app::view::crop::{
    Corner, CursorHint, DragMode, InteractionController, InteractionState, ResizeHandleSet,
    SelectionRegion,
};
pub use app::{
    CropEvent, Cropper, EventFilter, EventKind, InputEvent, KeyCode, KeyEvent, PointerEvent,
    SubscriptionId,
};
pub use config::CropperConfig;
pub use domain::document::operations::{CropRegion, DisplayLayout};
pub use domain::geometry::{AspectRatio, Point, Rectangle, Region, SurfaceSize};
pub use error::{CropError, Result};
