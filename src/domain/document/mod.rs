// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Source image model and the operations mapping display space onto it.

pub mod operations;
#[cfg(feature = "image")]
pub mod raster;
