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

/// Invert an image
///
/// Bitmaps swap ink and paper, graymaps and pixmaps map every
/// channel `v` to `max_value - v`.
#[derive(Default, Copy, Clone)]
pub struct Invert;

impl Invert {
    pub fn new() -> Invert {
        Self::default()
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut PnmImage) -> Result<(), PnmErrors> {
        match image {
            PnmImage::Bitmap(image) => image.invert(),
            PnmImage::Graymap(image) => image.invert(),
            PnmImage::Pixmap(image) => image.invert()
        }
        Ok(())
    }

    fn supported_kinds(&self) -> &'static [PnmKind] {
        ALL_KINDS
    }
}
