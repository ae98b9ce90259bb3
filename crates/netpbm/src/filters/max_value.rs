/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_core::magic::PnmKind;

use crate::errors::PnmErrors;
use crate::image::PnmImage;
use crate::traits::OperationsTrait;

/// Rescale a graymap or pixmap to a new max value
///
/// Bitmaps have no max value, this fails with
/// [`PnmErrors::UnsupportedOperation`] for them.
pub struct SetMaxValue {
    new_max: u8
}

impl SetMaxValue {
    #[must_use]
    pub fn new(new_max: u8) -> SetMaxValue {
        SetMaxValue { new_max }
    }
}

impl OperationsTrait for SetMaxValue {
    fn name(&self) -> &'static str {
        "Set max value"
    }

    fn execute_impl(&self, image: &mut PnmImage) -> Result<(), PnmErrors> {
        match image {
            PnmImage::Graymap(image) => image.set_max_value(self.new_max),
            PnmImage::Pixmap(image) => image.set_max_value(self.new_max),
            PnmImage::Bitmap(_) => Err(PnmErrors::UnsupportedOperation(
                self.name(),
                PnmKind::Bitmap
            ))
        }
    }

    fn supported_kinds(&self) -> &'static [PnmKind] {
        &[PnmKind::Graymap, PnmKind::Pixmap]
    }
}
