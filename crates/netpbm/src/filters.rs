/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image operations usable through [`OperationsTrait`](crate::traits::OperationsTrait)
pub use flip::{Flip, Flop};
pub use invert::Invert;
pub use max_value::SetMaxValue;
pub use rotate::Rotate90;

mod flip;
mod invert;
mod max_value;
mod rotate;

use netpbm_core::magic::PnmKind;

/// Every kind, for operations that apply to all images
pub(crate) const ALL_KINDS: &[PnmKind] = &[PnmKind::Bitmap, PnmKind::Graymap, PnmKind::Pixmap];
