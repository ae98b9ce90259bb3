/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 24 bit color images, P3 and P6
use core::num::NonZeroU8;
use std::io::Write;
use std::path::Path;

use netpbm_core::magic::{Magic, PnmKind};
use netpbm_core::options::DecoderOptions;
use netpbm_core::pixel::Pixel;
use netpbm_imageprocs::depth::rescale_max;
use netpbm_imageprocs::grayscale::rgb_to_luminance;
use netpbm_imageprocs::invert::invert;
use netpbm_imageprocs::traits::Sample;

use crate::bitmap::Bitmap;
use crate::decoder::PnmDecoder;
use crate::encoder::PnmEncoder;
use crate::errors::PnmErrors;
use crate::file_io::{read_file, write_file};
use crate::graymap::Graymap;
use crate::grid::Grid;
use crate::metadata::ImageMetadata;

/// A color image with three eight bit channels per pixel
///
/// All channels share a single declared max value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    grid:      Grid<Pixel>,
    magic:     Magic,
    max_value: u8
}

impl Pixmap {
    /// Create an all black P3 pixmap
    pub fn new(width: usize, height: usize, max_value: u8) -> Pixmap {
        Pixmap {
            grid: Grid::new(width, height),
            magic: Magic::P3,
            max_value
        }
    }

    pub(crate) const fn from_parts(grid: Grid<Pixel>, magic: Magic, max_value: u8) -> Pixmap {
        Pixmap {
            grid,
            magic,
            max_value
        }
    }

    /// Create a pixmap from a grid
    ///
    /// # Errors
    /// - [`PnmErrors::Format`] if `magic` is not P3 or P6
    /// - [`PnmErrors::ValueOutOfRange`] if a channel exceeds `max_value`
    pub fn from_grid(
        grid: Grid<Pixel>, magic: Magic, max_value: u8
    ) -> Result<Pixmap, PnmErrors> {
        check_magic(magic)?;

        if let Some(pixel) = grid.data().iter().find(|x| x.max_channel() > max_value) {
            let value = usize::from(pixel.max_channel());
            return Err(PnmErrors::ValueOutOfRange(value, max_value));
        }
        Ok(Pixmap::from_parts(grid, magic, max_value))
    }

    /// Decode a P3 or P6 image held in memory
    pub fn decode(data: &[u8]) -> Result<Pixmap, PnmErrors> {
        Pixmap::decode_with_options(data, DecoderOptions::default())
    }

    pub fn decode_with_options(data: &[u8], options: DecoderOptions) -> Result<Pixmap, PnmErrors> {
        PnmDecoder::new_with_options(options, data).decode_pixmap()
    }

    /// Read and decode a file
    pub fn open<P: AsRef<Path>>(file: P) -> Result<Pixmap, PnmErrors> {
        Pixmap::open_with_options(file, DecoderOptions::default())
    }

    pub fn open_with_options<P: AsRef<Path>>(
        file: P, options: DecoderOptions
    ) -> Result<Pixmap, PnmErrors> {
        let data = read_file(file)?;
        Pixmap::decode_with_options(&data, options)
    }

    /// Encode into a new vector using the stored magic
    pub fn encode(&self) -> Result<Vec<u8>, PnmErrors> {
        let mut sink = vec![];
        self.encode_to(&mut sink)?;
        Ok(sink)
    }

    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<(), PnmErrors> {
        PnmEncoder::new(writer).encode_pixmap(self)
    }

    /// Encode and write to `file`, creating or truncating it
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), PnmErrors> {
        write_file(file, |writer| self.encode_to(writer))
    }

    /// Return the pixel at `(x, y)` or `None` outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.grid.get(x, y)
    }

    /// Set the pixel at `(x, y)`
    ///
    /// # Errors
    /// - [`PnmErrors::ValueOutOfRange`] if any channel exceeds the max value
    /// - [`PnmErrors::Index`] if the coordinates lie outside the image
    pub fn set(&mut self, x: usize, y: usize, value: Pixel) -> Result<(), PnmErrors> {
        let channel = value.max_channel();

        if channel > self.max_value {
            return Err(PnmErrors::ValueOutOfRange(usize::from(channel), self.max_value));
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

    /// Switch between P3 and P6
    ///
    /// # Errors
    /// [`PnmErrors::Format`] if `magic` is not P3 or P6
    pub fn set_magic(&mut self, magic: Magic) -> Result<(), PnmErrors> {
        check_magic(magic)?;
        self.magic = magic;
        Ok(())
    }

    pub const fn max_value(&self) -> u8 {
        self.max_value
    }

    pub const fn grid(&self) -> &Grid<Pixel> {
        &self.grid
    }

    /// Mutable access to the pixels, callers keep channels within the max value
    pub(crate) fn grid_mut(&mut self) -> &mut Grid<Pixel> {
        &mut self.grid
    }

    pub fn metadata(&self) -> ImageMetadata {
        let (width, height) = self.dimensions();
        ImageMetadata::new(width, height, self.magic, Some(self.max_value))
    }

    /// Replace every channel `v` with `max_value - v`
    pub fn invert(&mut self) {
        invert(self.grid.data_mut(), self.max_value);
    }

    /// Rescale every channel proportionally to a new max value
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

    /// Convert into a new graymap with the same max value
    ///
    /// Each sample is `floor((r + g + b) / 3)`.
    pub fn to_graymap(&self) -> Graymap {
        let (width, height) = self.dimensions();
        let mut luma = Grid::new(width, height);

        rgb_to_luminance(self.grid.data(), luma.data_mut());

        Graymap::from_parts(luma, self.magic.with_kind(PnmKind::Graymap), self.max_value)
    }

    /// Convert into a new bitmap, thresholding luminance at `max_value / 2`
    pub fn to_bitmap(&self) -> Bitmap {
        self.to_graymap().to_bitmap()
    }
}

fn check_magic(magic: Magic) -> Result<(), PnmErrors> {
    if magic.kind() != PnmKind::Pixmap {
        let msg = format!("Magic {magic} is not a pixmap identifier, expected P3 or P6");
        return Err(PnmErrors::Format(msg));
    }
    Ok(())
}
