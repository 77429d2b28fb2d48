// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: selection state, resize handles and gesture handling.

mod controller;
mod handle;
mod selection;

pub use controller::{DragMode, InputBinding, InteractionController, InteractionState};
pub use handle::{Corner, CursorHint, ResizeHandle, ResizeHandleSet};
pub use selection::{SelectionRegion, SelectionSnapshot};
