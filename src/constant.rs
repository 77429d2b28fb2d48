// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Constants that should not be changed by the user.

/// Aspect ratio used when none is configured.
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// Default side length of a resize handle hit-box, in display pixels.
pub const DEFAULT_HANDLE_WIDTH: f32 = 16.0;

/// Default handle offset (0 = hit-box just inside the selection corner).
pub const DEFAULT_HANDLE_OFFSET: f32 = 0.0;

/// Default minimum selection width, in source image pixels.
pub const DEFAULT_MINIMUM_WIDTH: f32 = 50.0;

/// Distance an arrow key moves the selection, in display pixels.
pub const NUDGE_STEP: f32 = 5.0;

/// Tolerance for float comparisons on geometry.
pub const GEOMETRY_EPSILON: f32 = 0.0001;

/// Surface size used by the command line driver when none is given.
pub const DEFAULT_SURFACE: (f32, f32) = (800.0, 600.0);
