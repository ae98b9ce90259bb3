/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An encoder for all six netpbm variants
//!
//! The magic identifier stored in the image decides both the kind and
//! whether the raster is written as ASCII tokens or raw bytes.
use std::io::Write;

use netpbm_core::magic::Magic;

use crate::bitmap::Bitmap;
use crate::errors::PnmErrors;
use crate::graymap::Graymap;
use crate::grid::Grid;
use crate::pixmap::Pixmap;

/// A netpbm encoder
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    /// Write magic, dimensions and, for graymaps and pixmaps, the max value
    fn write_headers(
        &mut self, magic: Magic, width: usize, height: usize, max_value: Option<u8>
    ) -> Result<(), PnmErrors> {
        let header = match max_value {
            Some(max_value) => format!("{magic}\n{width} {height}\n{max_value}\n"),
            None => format!("{magic}\n{width} {height}\n")
        };
        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Write one line per row, tokens separated by a single space
    fn write_ascii_rows<T: Copy, F>(&mut self, grid: &Grid<T>, push_pixel: F) -> Result<(), PnmErrors>
    where
        F: Fn(&mut String, T)
    {
        let mut line = String::new();

        for row in grid.rows() {
            line.clear();

            for (i, pixel) in row.iter().enumerate() {
                if i != 0 {
                    line.push(' ');
                }
                push_pixel(&mut line, *pixel);
            }
            line.push('\n');

            self.writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Encode a bitmap as P1 or P4
    ///
    /// P4 rows are packed most significant bit first and padded
    /// with zero bits to a whole number of bytes.
    pub fn encode_bitmap(&mut self, image: &Bitmap) -> Result<(), PnmErrors> {
        let grid = image.grid();
        let (width, height) = grid.dimensions();

        self.write_headers(image.magic(), width, height, None)?;

        if image.magic().is_binary() {
            let mut packed = vec![0_u8; width.div_ceil(8)];

            for row in grid.rows() {
                packed.fill(0);

                for (x, bit) in row.iter().enumerate() {
                    if *bit {
                        packed[x / 8] |= 0x80 >> (x % 8);
                    }
                }
                self.writer.write_all(&packed)?;
            }
        } else {
            self.write_ascii_rows(grid, |line, bit| line.push(if bit { '1' } else { '0' }))?;
        }
        Ok(())
    }

    /// Encode a graymap as P2 or P5
    pub fn encode_graymap(&mut self, image: &Graymap) -> Result<(), PnmErrors> {
        let grid = image.grid();
        let (width, height) = grid.dimensions();

        self.write_headers(image.magic(), width, height, Some(image.max_value()))?;

        if image.magic().is_binary() {
            self.writer.write_all(grid.data())?;
        } else {
            self.write_ascii_rows(grid, |line, value| line.push_str(&value.to_string()))?;
        }
        Ok(())
    }

    /// Encode a pixmap as P3 or P6
    pub fn encode_pixmap(&mut self, image: &Pixmap) -> Result<(), PnmErrors> {
        let grid = image.grid();
        let (width, height) = grid.dimensions();

        self.write_headers(image.magic(), width, height, Some(image.max_value()))?;

        if image.magic().is_binary() {
            let owned_data = grid
                .data()
                .iter()
                .flat_map(|x| x.to_array())
                .collect::<Vec<u8>>();

            self.writer.write_all(&owned_data)?;
        } else {
            self.write_ascii_rows(grid, |line, pixel| {
                line.push_str(&format!("{} {} {}", pixel.r, pixel.g, pixel.b));
            })?;
        }
        Ok(())
    }
}
