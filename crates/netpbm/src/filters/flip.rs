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

/// Mirror the image left to right
#[derive(Default)]
pub struct Flip;

impl Flip {
    pub fn new() -> Flip {
        Self::default()
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        "Flip"
    }

    fn execute_impl(&self, image: &mut PnmImage) -> Result<(), PnmErrors> {
        match image {
            PnmImage::Bitmap(image) => image.flip(),
            PnmImage::Graymap(image) => image.flip(),
            PnmImage::Pixmap(image) => image.flip()
        }
        Ok(())
    }

    fn supported_kinds(&self) -> &'static [PnmKind] {
        ALL_KINDS
    }
}

/// Mirror the image top to bottom
#[derive(Default)]
pub struct Flop;

impl Flop {
    pub fn new() -> Flop {
        Self::default()
    }
}

impl OperationsTrait for Flop {
    fn name(&self) -> &'static str {
        "Flop"
    }

    fn execute_impl(&self, image: &mut PnmImage) -> Result<(), PnmErrors> {
        match image {
            PnmImage::Bitmap(image) => image.flop(),
            PnmImage::Graymap(image) => image.flop(),
            PnmImage::Pixmap(image) => image.flop()
        }
        Ok(())
    }

    fn supported_kinds(&self) -> &'static [PnmKind] {
        ALL_KINDS
    }
}
