// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/mod.rs

pub mod crop;
pub mod fit;

pub use crop::{CropRegion, compute_source_region};
pub use fit::{DisplayLayout, fit_to_surface};
