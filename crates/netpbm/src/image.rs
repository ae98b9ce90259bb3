/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image of any of the three kinds
//!
//! Use this when the kind is only known after reading the magic
//! identifier, e.g. when opening arbitrary files.
use std::io::Write;
use std::path::Path;

use netpbm_core::magic::{Magic, PnmKind};
use netpbm_core::options::DecoderOptions;

use crate::bitmap::Bitmap;
use crate::decoder::PnmDecoder;
use crate::errors::PnmErrors;
use crate::file_io::{read_file, write_file};
use crate::graymap::Graymap;
use crate::metadata::ImageMetadata;
use crate::pixmap::Pixmap;

/// A decoded netpbm image
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PnmImage {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap)
}

impl PnmImage {
    /// Decode an image held in memory, the kind is taken from the magic identifier
    ///
    /// # Example
    /// ```
    /// use netpbm::PnmImage;
    /// use netpbm_core::magic::PnmKind;
    ///
    /// let image = PnmImage::decode(b"P3\n1 1\n255\n255 0 0\n").unwrap();
    /// assert_eq!(image.kind(), PnmKind::Pixmap);
    /// ```
    pub fn decode(data: &[u8]) -> Result<PnmImage, PnmErrors> {
        PnmImage::decode_with_options(data, DecoderOptions::default())
    }

    pub fn decode_with_options(data: &[u8], options: DecoderOptions) -> Result<PnmImage, PnmErrors> {
        PnmDecoder::new_with_options(options, data).decode()
    }

    /// Read and decode a file of any kind
    pub fn open<P: AsRef<Path>>(file: P) -> Result<PnmImage, PnmErrors> {
        PnmImage::open_with_options(file, DecoderOptions::default())
    }

    pub fn open_with_options<P: AsRef<Path>>(
        file: P, options: DecoderOptions
    ) -> Result<PnmImage, PnmErrors> {
        let data = read_file(file)?;
        PnmImage::decode_with_options(&data, options)
    }

    /// Encode into a new vector using the stored magic
    pub fn encode(&self) -> Result<Vec<u8>, PnmErrors> {
        let mut sink = vec![];
        self.encode_to(&mut sink)?;
        Ok(sink)
    }

    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<(), PnmErrors> {
        match self {
            PnmImage::Bitmap(image) => image.encode_to(writer),
            PnmImage::Graymap(image) => image.encode_to(writer),
            PnmImage::Pixmap(image) => image.encode_to(writer)
        }
    }

    /// Encode and write to `file`, creating or truncating it
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), PnmErrors> {
        write_file(file, |writer| self.encode_to(writer))
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        match self {
            PnmImage::Bitmap(image) => image.dimensions(),
            PnmImage::Graymap(image) => image.dimensions(),
            PnmImage::Pixmap(image) => image.dimensions()
        }
    }

    pub const fn magic(&self) -> Magic {
        match self {
            PnmImage::Bitmap(image) => image.magic(),
            PnmImage::Graymap(image) => image.magic(),
            PnmImage::Pixmap(image) => image.magic()
        }
    }

    pub const fn kind(&self) -> PnmKind {
        self.magic().kind()
    }

    pub fn metadata(&self) -> ImageMetadata {
        match self {
            PnmImage::Bitmap(image) => image.metadata(),
            PnmImage::Graymap(image) => image.metadata(),
            PnmImage::Pixmap(image) => image.metadata()
        }
    }

    pub const fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            PnmImage::Bitmap(image) => Some(image),
            _ => None
        }
    }

    pub const fn as_graymap(&self) -> Option<&Graymap> {
        match self {
            PnmImage::Graymap(image) => Some(image),
            _ => None
        }
    }

    pub const fn as_pixmap(&self) -> Option<&Pixmap> {
        match self {
            PnmImage::Pixmap(image) => Some(image),
            _ => None
        }
    }
}

impl From<Bitmap> for PnmImage {
    fn from(value: Bitmap) -> Self {
        PnmImage::Bitmap(value)
    }
}

impl From<Graymap> for PnmImage {
    fn from(value: Graymap) -> Self {
        PnmImage::Graymap(value)
    }
}

impl From<Pixmap> for PnmImage {
    fn from(value: Pixmap) -> Self {
        PnmImage::Pixmap(value)
    }
}
