/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! One bit images, P1 and P4
use std::io::Write;
use std::path::Path;

use netpbm_core::magic::{Magic, PnmKind};
use netpbm_core::options::DecoderOptions;
use netpbm_imageprocs::invert::invert_bits;

use crate::decoder::PnmDecoder;
use crate::encoder::PnmEncoder;
use crate::errors::PnmErrors;
use crate::file_io::{read_file, write_file};
use crate::grid::Grid;
use crate::metadata::ImageMetadata;

/// A one bit image
///
/// `true` is ink (black), `false` is paper (white), matching the
/// `1` and `0` of the format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    grid:  Grid<bool>,
    magic: Magic
}

impl Bitmap {
    /// Create a blank (all paper) P1 bitmap
    pub fn new(width: usize, height: usize) -> Bitmap {
        Bitmap {
            grid:  Grid::new(width, height),
            magic: Magic::P1
        }
    }

    pub(crate) const fn from_parts(grid: Grid<bool>, magic: Magic) -> Bitmap {
        Bitmap { grid, magic }
    }

    /// Create a bitmap from a grid
    ///
    /// # Errors
    /// [`PnmErrors::Format`] if `magic` is not P1 or P4
    pub fn from_grid(grid: Grid<bool>, magic: Magic) -> Result<Bitmap, PnmErrors> {
        check_magic(magic)?;
        Ok(Bitmap { grid, magic })
    }

    /// Decode a P1 or P4 image held in memory
    ///
    /// # Example
    /// ```
    /// use netpbm::Bitmap;
    /// let image = Bitmap::decode(b"P1\n2 2\n1 0\n0 1\n").unwrap();
    ///
    /// assert!(image.get(0, 0));
    /// assert!(!image.get(1, 0));
    /// ```
    pub fn decode(data: &[u8]) -> Result<Bitmap, PnmErrors> {
        Bitmap::decode_with_options(data, DecoderOptions::default())
    }

    pub fn decode_with_options(data: &[u8], options: DecoderOptions) -> Result<Bitmap, PnmErrors> {
        PnmDecoder::new_with_options(options, data).decode_bitmap()
    }

    /// Read and decode a file
    pub fn open<P: AsRef<Path>>(file: P) -> Result<Bitmap, PnmErrors> {
        Bitmap::open_with_options(file, DecoderOptions::default())
    }

    pub fn open_with_options<P: AsRef<Path>>(
        file: P, options: DecoderOptions
    ) -> Result<Bitmap, PnmErrors> {
        let data = read_file(file)?;
        Bitmap::decode_with_options(&data, options)
    }

    /// Encode into a new vector using the stored magic
    pub fn encode(&self) -> Result<Vec<u8>, PnmErrors> {
        let mut sink = vec![];
        self.encode_to(&mut sink)?;
        Ok(sink)
    }

    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<(), PnmErrors> {
        PnmEncoder::new(writer).encode_bitmap(self)
    }

    /// Encode and write to `file`, creating or truncating it
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), PnmErrors> {
        write_file(file, |writer| self.encode_to(writer))
    }

    /// Return the pixel at `(x, y)`, pixels outside the image read as paper
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y).unwrap_or(false)
    }

    /// Set the pixel at `(x, y)`
    ///
    /// # Errors
    /// [`PnmErrors::Index`] if the coordinates lie outside the image
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<(), PnmErrors> {
        self.grid.set(x, y, value)
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub const fn magic(&self) -> Magic {
        self.magic
    }

    /// Switch between P1 and P4
    ///
    /// # Errors
    /// [`PnmErrors::Format`] if `magic` is not P1 or P4
    pub fn set_magic(&mut self, magic: Magic) -> Result<(), PnmErrors> {
        check_magic(magic)?;
        self.magic = magic;
        Ok(())
    }

    pub const fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<bool> {
        &mut self.grid
    }

    pub fn metadata(&self) -> ImageMetadata {
        let (width, height) = self.dimensions();
        ImageMetadata::new(width, height, self.magic, None)
    }

    /// Swap ink and paper
    pub fn invert(&mut self) {
        invert_bits(self.grid.data_mut());
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
}

fn check_magic(magic: Magic) -> Result<(), PnmErrors> {
    if magic.kind() != PnmKind::Bitmap {
        let msg = format!("Magic {magic} is not a bitmap identifier, expected P1 or P4");
        return Err(PnmErrors::Format(msg));
    }
    Ok(())
}
