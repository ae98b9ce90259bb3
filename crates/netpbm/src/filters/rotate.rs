/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_core::magic::PnmKind;

use crate::errors::PnmErrors;
use crate::filters::ALL_KINDS;
use crate::image::PnmImage;
use crate::traits::OperationsTrait;

/// Rotate an image 90 degrees clockwise
///
/// ```text
///                   ┌──────┐
///┌─────────┐        │ ───► │
///│ ▲       │        │ 90   │
///│ │       │        │      │
///└─┴───────┘        │      │
///                   └──────┘
/// ```
#[derive(Default)]
pub struct Rotate90;

impl Rotate90 {
    pub fn new() -> Rotate90 {
        Self::default()
    }
}

impl OperationsTrait for Rotate90 {
    fn name(&self) -> &'static str {
        "Rotate 90"
    }

    fn execute_impl(&self, image: &mut PnmImage) -> Result<(), PnmErrors> {
        match image {
            PnmImage::Bitmap(image) => image.rotate_90_cw(),
            PnmImage::Graymap(image) => image.rotate_90_cw(),
            PnmImage::Pixmap(image) => image.rotate_90_cw()
        }
        Ok(())
    }

    fn supported_kinds(&self) -> &'static [PnmKind] {
        ALL_KINDS
    }
}
