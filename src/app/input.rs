// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/input.rs
//
// Normalized input consumed by the interaction controller.

use crate::domain::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Pointer event in surface-local display coordinates.
///
/// Clamping drags that leave the surface is the host's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Escape,
    Other,
}

impl KeyCode {
    /// Map a DOM style key code (37..40 arrows, 27 escape).
    pub fn from_dom(code: u32) -> Self {
        match code {
            27 => Self::Escape,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            _ => Self::Other,
        }
    }

    /// Unit direction for arrow keys.
    pub fn arrow_direction(self) -> Option<(f32, f32)> {
        match self {
            Self::ArrowLeft => Some((-1.0, 0.0)),
            Self::ArrowUp => Some((0.0, -1.0)),
            Self::ArrowRight => Some((1.0, 0.0)),
            Self::ArrowDown => Some((0.0, 1.0)),
            Self::Escape | Self::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyKind,
    pub code: KeyCode,
}

impl KeyEvent {
    pub fn down(code: KeyCode) -> Self {
        Self {
            kind: KeyKind::Down,
            code,
        }
    }

    pub fn up(code: KeyCode) -> Self {
        Self {
            kind: KeyKind::Up,
            code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    /// Host lost focus mid-gesture.
    Blur,
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}
