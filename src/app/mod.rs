// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Cropper state, input, events and the selection view.

pub mod input;
pub mod message;
pub mod model;
pub mod observer;
pub mod view;

pub use input::{InputEvent, KeyCode, KeyEvent, KeyKind, PointerEvent, PointerKind};
pub use message::{CropEvent, EventKind, HandleDraw, SelectionDimensions, SelectionToolDraw};
pub use model::Cropper;
pub use observer::{EventBus, EventFilter, SubscriptionId};
