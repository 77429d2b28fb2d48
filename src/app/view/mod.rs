// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View layer: the crop selection and its gestures.

pub mod crop;
