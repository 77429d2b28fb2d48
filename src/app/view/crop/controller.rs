// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/controller.rs
//
// Gesture state machine turning pointer and key input into selection edits.

use std::mem;

use crate::app::input::{InputEvent, KeyCode, KeyEvent, KeyKind, PointerEvent, PointerKind};
use crate::app::message::CropEvent;
use crate::constant::NUDGE_STEP;
use crate::domain::geometry::{AspectRatio, Point};

use super::handle::{Corner, CursorHint};
use super::selection::{SelectionRegion, SelectionSnapshot};

/// What an in-progress drag does with pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Drawing a new selection from the press point.
    Creating,
    /// Dragging the whole selection.
    Moving,
    /// Dragging one corner; the opposite corner stays put.
    ResizingFromHandle(Corner),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragMode),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Connection between the controller and the host's input stream.
///
/// Once disposed, every input event is dropped.
#[derive(Debug, Default)]
pub struct InputBinding {
    disposed: bool,
    /// Number of drags that were discarded by a new pointer-down.
    replaced_drags: u32,
}

impl InputBinding {
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn replaced_drags(&self) -> u32 {
        self.replaced_drags
    }
}

/// Drives a [`SelectionRegion`] from input events.
#[derive(Debug)]
pub struct InteractionController {
    region: SelectionRegion,
    state: InteractionState,
    binding: InputBinding,
    cursor: CursorHint,
    /// Handle grabbed by the current drag; anchors are swapped on its first move.
    pending_anchor: Option<Corner>,
    /// Geometry at the last commit; a gesture that ends on the same geometry
    /// publishes nothing.
    last_committed: Option<SelectionSnapshot>,
}

impl InteractionController {
    pub fn new(region: SelectionRegion) -> Self {
        Self {
            region,
            state: InteractionState::Idle,
            binding: InputBinding::default(),
            cursor: CursorHint::default(),
            pending_anchor: None,
            last_committed: None,
        }
    }

    pub fn region(&self) -> &SelectionRegion {
        &self.region
    }

    pub fn region_mut(&mut self) -> &mut SelectionRegion {
        &mut self.region
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    pub fn is_disposed(&self) -> bool {
        self.binding.is_disposed()
    }

    pub fn binding(&self) -> &InputBinding {
        &self.binding
    }

    // =========================================================================
    // Input dispatch
    // =========================================================================

    pub fn handle_event(&mut self, event: InputEvent) {
        if self.binding.is_disposed() {
            log::warn!("Input ignored after dispose: {event:?}");
            return;
        }

        match event {
            InputEvent::Pointer(pointer) => self.on_pointer(pointer),
            InputEvent::Key(key) => self.on_key(key),
            InputEvent::Blur => {
                if self.state.is_dragging() {
                    log::debug!("Focus lost during drag, ending gesture");
                }
                self.finish_gesture();
            }
        }
    }

    fn on_pointer(&mut self, event: PointerEvent) {
        let point = event.position();
        match event.kind {
            PointerKind::Down => self.on_pointer_down(point),
            PointerKind::Move => self.on_pointer_move(point),
            PointerKind::Up => {
                self.finish_gesture();
                self.update_cursor(point);
            }
        }
    }

    fn on_pointer_down(&mut self, point: Point) {
        let previous = mem::replace(&mut self.state, InteractionState::Idle);
        if let InteractionState::Dragging(mode) = previous {
            self.binding.replaced_drags += 1;
            log::debug!("Discarding unfinished {mode:?} drag");
        }
        self.pending_anchor = None;

        let handle = if self.region.is_active() {
            self.region.handles().find_handle_at_coord(point)
        } else {
            None
        };

        let mode = if let Some(corner) = handle {
            self.pending_anchor = Some(corner);
            DragMode::ResizingFromHandle(corner)
        } else if self.region.is_coord_within_bounds(point) {
            DragMode::Moving
        } else {
            self.region.set_fixed_coord(point);
            DragMode::Creating
        };

        log::debug!("Drag started: {mode:?} at ({:.1}, {:.1})", point.x, point.y);
        self.state = InteractionState::Dragging(mode);
    }

    fn on_pointer_move(&mut self, point: Point) {
        match self.state {
            InteractionState::Dragging(DragMode::Creating) => self.region.set_loose_coord(point),
            InteractionState::Dragging(DragMode::ResizingFromHandle(_)) => {
                match self.pending_anchor.take() {
                    Some(corner) => self.anchor_opposite_corner(corner, point),
                    None => self.region.set_loose_coord(point),
                }
            }
            InteractionState::Dragging(DragMode::Moving) => self.move_to(point),
            InteractionState::Idle => self.update_cursor(point),
        }
    }

    fn on_key(&mut self, event: KeyEvent) {
        match event.kind {
            KeyKind::Down => self.on_key_down(event.code),
            KeyKind::Up => self.finish_gesture(),
        }
    }

    fn on_key_down(&mut self, code: KeyCode) {
        if !self.region.is_active() {
            return;
        }

        if code == KeyCode::Escape {
            self.clear_selection();
        } else if let Some((dx, dy)) = code.arrow_direction() {
            self.region.nudge(dx * NUDGE_STEP, dy * NUDGE_STEP);
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Pin the corner opposite to `corner` and drag the loose anchor to `point`.
    fn anchor_opposite_corner(&mut self, corner: Corner, point: Point) {
        let (Some(fixed), Some(loose)) = (self.region.fixed_coord(), self.region.loose_coord())
        else {
            return;
        };

        let new_fixed = match corner {
            Corner::NorthWest => loose,
            Corner::NorthEast => Point::new(fixed.x, loose.y),
            Corner::SouthWest => Point::new(loose.x, fixed.y),
            Corner::SouthEast => fixed,
        };
        self.region.create(new_fixed, point);
    }

    /// Center the selection on `point`, never past the top/left edge.
    fn move_to(&mut self, point: Point) {
        let (width, height) = (self.region.width(), self.region.height());
        let fixed = Point::new(
            (point.x - width / 2.0).max(0.0),
            (point.y - height / 2.0).max(0.0),
        );
        self.region.create(fixed, fixed.offset(width, height));
    }

    /// End the current gesture and commit the selection if it changed.
    fn finish_gesture(&mut self) {
        self.state = InteractionState::Idle;

        let Some(snapshot) = self.region.snapshot() else {
            return;
        };
        if self.last_committed == Some(snapshot) {
            return;
        }
        self.commit();
    }

    fn commit(&mut self) {
        if self.region.is_dirty() {
            self.region.ensure_minimum_size();
            self.region.normalise();
            self.region.mark_committed();
        }

        self.region.emit_dimensions();
        self.region.draw_handles();
        self.last_committed = self.region.snapshot();

        if let Some(d) = self.region.dimensions() {
            log::debug!(
                "Selection committed: {:.1}x{:.1} at ({:.1}, {:.1})",
                d.width,
                d.height,
                d.left,
                d.top
            );
        }
    }

    fn update_cursor(&mut self, point: Point) {
        let cursor = if let Some(corner) = self.region.handles().find_handle_at_coord(point) {
            corner.cursor()
        } else if self.region.is_coord_within_bounds(point) {
            CursorHint::Move
        } else {
            CursorHint::Crosshair
        };

        self.set_cursor(cursor);
    }

    fn set_cursor(&mut self, cursor: CursorHint) {
        if cursor != self.cursor {
            self.cursor = cursor;
            self.region.publish(CropEvent::CursorChanged(cursor));
        }
    }

    // =========================================================================
    // Programmatic control
    // =========================================================================

    /// Apply a new ratio and redraw an active selection under it.
    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.region.set_aspect_ratio(ratio);

        if let Some(loose) = self.region.loose_coord() {
            self.region.set_loose_coord(loose);
            self.commit();
        }
    }

    pub fn clear_selection(&mut self) {
        self.state = InteractionState::Idle;
        self.pending_anchor = None;
        self.last_committed = None;
        if self.region.is_active() {
            self.region.clear();
        }
        self.set_cursor(CursorHint::Crosshair);
    }

    /// Stop listening for input. Cannot be undone.
    pub fn dispose(&mut self) {
        if self.binding.is_disposed() {
            return;
        }
        self.state = InteractionState::Idle;
        self.pending_anchor = None;
        self.binding.dispose();
        log::debug!(
            "Input binding disposed ({} drag(s) replaced during its lifetime)",
            self.binding.replaced_drags
        );
    }
}
