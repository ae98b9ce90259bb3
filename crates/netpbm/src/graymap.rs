/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Eight bit grayscale images, P2 and P5
use core::num::NonZeroU8;
use std::io::Write;
use std::path::Path;

use netpbm_core::magic::{Magic, PnmKind};
use netpbm_core::options::DecoderOptions;
use netpbm_imageprocs::depth::rescale_max;
use netpbm_imageprocs::invert::invert;
use netpbm_imageprocs::threshold::threshold_to_bits;

use crate::bitmap::Bitmap;
use crate::decoder::PnmDecoder;
use crate::encoder::PnmEncoder;
use crate::errors::PnmErrors;
use crate::file_io::{read_file, write_file};
use crate::grid::Grid;
use crate::metadata::ImageMetadata;

/// An eight bit grayscale image
///
/// Every sample lies in `0..=max_value`, where the max value is
/// declared by the image and need not be 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graymap {
    grid:      Grid<u8>,
    magic:     Magic,
    max_value: u8
}

impl Graymap {
    /// Create an all black P2 graymap
    pub fn new(width: usize, height: usize, max_value: u8) -> Graymap {
        Graymap {
            grid: Grid::new(width, height),
            magic: Magic::P2,
            max_value
        }
    }

    pub(crate) const fn from_parts(grid: Grid<u8>, magic: Magic, max_value: u8) -> Graymap {
        Graymap {
            grid,
            magic,
            max_value
        }
    }

    /// Create a graymap from a grid
    ///
    /// # Errors
    /// - [`PnmErrors::Format`] if `magic` is not P2 or P5
    /// - [`PnmErrors::ValueOutOfRange`] if a sample exceeds `max_value`
    pub fn from_grid(grid: Grid<u8>, magic: Magic, max_value: u8) -> Result<Graymap, PnmErrors> {
        check_magic(magic)?;

        if let Some(value) = grid.data().iter().find(|x| **x > max_value) {
            return Err(PnmErrors::ValueOutOfRange(usize::from(*value), max_value));
        }
        Ok(Graymap::from_parts(grid, magic, max_value))
    }

    /// Decode a P2 or P5 image held in memory
    pub fn decode(data: &[u8]) -> Result<Graymap, PnmErrors> {
        Graymap::decode_with_options(data, DecoderOptions::default())
    }

    pub fn decode_with_options(data: &[u8], options: DecoderOptions) -> Result<Graymap, PnmErrors> {
        PnmDecoder::new_with_options(options, data).decode_graymap()
    }

    /// Read and decode a file
    pub fn open<P: AsRef<Path>>(file: P) -> Result<Graymap, PnmErrors> {
        Graymap::open_with_options(file, DecoderOptions::default())
    }

    pub fn open_with_options<P: AsRef<Path>>(
        file: P, options: DecoderOptions
    ) -> Result<Graymap, PnmErrors> {
        let data = read_file(file)?;
        Graymap::decode_with_options(&data, options)
    }

    /// Encode into a new vector using the stored magic
    pub fn encode(&self) -> Result<Vec<u8>, PnmErrors> {
        let mut sink = vec![];
        self.encode_to(&mut sink)?;
        Ok(sink)
    }

    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<(), PnmErrors> {
        PnmEncoder::new(writer).encode_graymap(self)
    }

    /// Encode and write to `file`, creating or truncating it
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), PnmErrors> {
        write_file(file, |writer| self.encode_to(writer))
    }

    /// Return the sample at `(x, y)` or `None` outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.grid.get(x, y)
    }

    /// Set the sample at `(x, y)`
    ///
    /// # Errors
    /// - [`PnmErrors::ValueOutOfRange`] if `value` exceeds the max value
    /// - [`PnmErrors::Index`] if the coordinates lie outside the image
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), PnmErrors> {
        if value > self.max_value {
            return Err(PnmErrors::ValueOutOfRange(usize::from(value), self.max_value));
        }
        self.grid.set(x, y, value)
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub const fn magic(&self) -> Magic {
        self.magic
    }

    /// Switch between P2 and P5
    ///
    /// # Errors
    /// [`PnmErrors::Format`] if `magic` is not P2 or P5
    pub fn set_magic(&mut self, magic: Magic) -> Result<(), PnmErrors> {
        check_magic(magic)?;
        self.magic = magic;
        Ok(())
    }

    pub const fn max_value(&self) -> u8 {
        self.max_value
    }

    pub const fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    pub fn metadata(&self) -> ImageMetadata {
        let (width, height) = self.dimensions();
        ImageMetadata::new(width, height, self.magic, Some(self.max_value))
    }

    /// Replace every sample `v` with `max_value - v`
    pub fn invert(&mut self) {
        invert(self.grid.data_mut(), self.max_value);
    }

    /// Rescale every sample proportionally to a new max value
    ///
    /// `new = floor(old * new_max / old_max)`
    ///
    /// # Errors
    /// [`PnmErrors::DivideByZero`] if the current max value is zero,
    /// the image is left untouched.
    pub fn set_max_value(&mut self, new_max: u8) -> Result<(), PnmErrors> {
        let old_max = NonZeroU8::new(self.max_value).ok_or(PnmErrors::DivideByZero)?;

        rescale_max(self.grid.data_mut(), old_max, new_max);
        self.max_value = new_max;

        Ok(())
    }

    /// Mirror left to right
    pub fn flip(&mut self) {
        self.grid.flip();
    }

    /// Mirror top to bottom
    pub fn flop(&mut self) {
        self.grid.flop();
    }

    /// Rotate 90 degrees clockwise, width and height swap
    pub fn rotate_90_cw(&mut self) {
        self.grid.rotate_90_cw();
    }

    /// Threshold into a new bitmap
    ///
    /// Samples below `max_value / 2` become ink, the rest paper.
    /// The bitmap keeps the ASCII or binary storage of this image.
    pub fn to_bitmap(&self) -> Bitmap {
        let (width, height) = self.dimensions();
        let mut bits = Grid::new(width, height);

        threshold_to_bits(self.grid.data(), self.max_value / 2, bits.data_mut());

        Bitmap::from_parts(bits, self.magic.with_kind(PnmKind::Bitmap))
    }
}

fn check_magic(magic: Magic) -> Result<(), PnmErrors> {
    if magic.kind() != PnmKind::Graymap {
        let msg = format!("Magic {magic} is not a graymap identifier, expected P2 or P5");
        return Err(PnmErrors::Format(msg));
    }
    Ok(())
}
