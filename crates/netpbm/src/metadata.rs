/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! A summary of the header of an image, without its pixels

use netpbm_core::magic::{Magic, PnmKind};

/// Image metadata
///
/// Every image type can produce this, it mirrors
/// what an encoder would write in the header.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to the serde module
    pub(crate) width:     usize,
    pub(crate) height:    usize,
    pub(crate) magic:     Magic,
    pub(crate) max_value: Option<u8>
}

impl ImageMetadata {
    pub(crate) const fn new(
        width: usize, height: usize, magic: Magic, max_value: Option<u8>
    ) -> ImageMetadata {
        ImageMetadata {
            width,
            height,
            magic,
            max_value
        }
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn magic(&self) -> Magic {
        self.magic
    }

    pub const fn kind(&self) -> PnmKind {
        self.magic.kind()
    }

    /// Return the max value, bitmaps have none
    pub const fn max_value(&self) -> Option<u8> {
        self.max_value
    }
}
