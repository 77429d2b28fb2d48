// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: pure geometry and image-space operations, no input handling.

pub mod document;
pub mod geometry;
