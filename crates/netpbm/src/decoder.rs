/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decoder for all six netpbm variants
//!
//! Every variant shares the same header grammar, only the raster
//! differs, so a single decoder reads the header and then
//! dispatches on the magic identifier.
use netpbm_core::bytestream::ZByteReader;
use netpbm_core::log::{info, warn};
use netpbm_core::magic::{Magic, PnmKind};
use netpbm_core::options::DecoderOptions;
use netpbm_core::pixel::Pixel;

use crate::bitmap::Bitmap;
use crate::errors::PnmErrors;
use crate::graymap::Graymap;
use crate::grid::Grid;
use crate::image::PnmImage;
use crate::pixmap::Pixmap;

/// An instance of a netpbm decoder
///
/// The decoder can decode P1 to P6, 8 bit samples only
pub struct PnmDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       u8,
    magic:           Magic,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PnmDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: netpbm encoded image
    ///
    /// # Example
    /// ```
    /// use netpbm::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(b"NOT VALID PBM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: netpbm encoded image
    ///
    /// # Example
    /// ```
    /// use netpbm::PnmDecoder;
    /// use netpbm_core::options::DecoderOptions;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PnmDecoder::new_with_options(options, b"P1\n2 1\n0 1\n");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder {
            width: 0,
            height: 0,
            max_value: 1,
            magic: Magic::P1,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }

    /// Read the header and store it in internal state
    ///
    /// Calling this more than once is a no-op.
    ///
    /// # Errors
    /// - [`PnmErrors::Format`] for an unknown magic identifier
    /// - [`PnmErrors::Dimension`] if width, height or max value cannot be parsed
    /// - [`PnmErrors::TooLargeDimensions`] if the image exceeds the configured limits
    pub fn decode_headers(&mut self) -> Result<(), PnmErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(2) {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 2 bytes in header but stream has {len}");

            return Err(PnmErrors::Format(msg));
        }
        let bytes = [self.reader.get_u8(), self.reader.get_u8()];

        let magic = Magic::from_bytes(bytes).ok_or_else(|| {
            let msg = format!(
                "Unknown magic identifier '{}', expected one of P1 to P6",
                String::from_utf8_lossy(&bytes)
            );
            PnmErrors::Format(msg)
        })?;
        // the identifier is a whole token, `P12` or `P1x` are not magics
        if let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_whitespace() && byte != b'#' {
                let msg = format!(
                    "Unknown magic identifier '{}{}', expected one of P1 to P6",
                    magic,
                    String::from_utf8_lossy(get_bytes_until_whitespace(&mut self.reader))
                );
                return Err(PnmErrors::Format(msg));
            }
        }
        info!("Magic: {magic}");

        skip_spaces(&mut self.reader);
        let width = self.get_integer("width")?;

        if width > self.options.max_width() {
            return Err(PnmErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width
            ));
        }
        skip_spaces(&mut self.reader);
        let height = self.get_integer("height")?;

        if height > self.options.max_height() {
            return Err(PnmErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height
            ));
        }
        info!("Width: {width}, height: {height}");

        if magic.kind().has_max_value() {
            skip_spaces(&mut self.reader);
            let max_value = self.get_integer("max value")?;

            if max_value > 255 {
                let msg = format!("Max value {max_value} greater than 255, only 8 bit samples are supported");
                return Err(PnmErrors::Dimension(msg));
            }
            info!("Max value: {max_value}");
            self.max_value = max_value as u8;
        }

        if magic.is_binary() {
            // exactly one whitespace byte separates the header from the raster
            match self.reader.peek_u8() {
                Some(byte) if byte.is_ascii_whitespace() => self.reader.skip(1),
                Some(byte) => {
                    let msg = format!(
                        "Expected a single whitespace before the raster but found '{}'",
                        byte as char
                    );
                    return Err(PnmErrors::Format(msg));
                }
                // an empty raster is reported when reading pixels
                None => ()
            }
        }

        self.magic = magic;
        self.width = width;
        self.height = height;
        self.decoded_headers = true;

        Ok(())
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the magic identifier or none if headers aren't decoded
    pub const fn magic(&self) -> Option<Magic> {
        if self.decoded_headers {
            Some(self.magic)
        } else {
            None
        }
    }

    /// Return the declared max value
    ///
    /// Returns none if headers aren't decoded or if the image is a bitmap,
    /// bitmaps have no max value.
    pub const fn max_value(&self) -> Option<u8> {
        if self.decoded_headers && self.magic.kind().has_max_value() {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a P1 or P4 image
    ///
    /// # Errors
    /// [`PnmErrors::Format`] if the stream holds another kind of image,
    /// in addition to header and raster errors
    pub fn decode_bitmap(&mut self) -> Result<Bitmap, PnmErrors> {
        self.decode_headers()?;
        self.expect_kind(PnmKind::Bitmap)?;

        let bits = if self.magic.is_binary() {
            self.read_packed_bits()?
        } else {
            self.read_ascii_bits()?
        };
        let grid = Grid::from_vec(self.width, self.height, bits)?;

        Ok(Bitmap::from_parts(grid, self.magic))
    }

    /// Decode a P2 or P5 image
    ///
    /// # Errors
    /// [`PnmErrors::Format`] if the stream holds another kind of image,
    /// in addition to header and raster errors
    pub fn decode_graymap(&mut self) -> Result<Graymap, PnmErrors> {
        self.decode_headers()?;
        self.expect_kind(PnmKind::Graymap)?;

        let count = self.sample_count()?;
        let samples = self.read_samples(count)?;
        let grid = Grid::from_vec(self.width, self.height, samples)?;

        Ok(Graymap::from_parts(grid, self.magic, self.max_value))
    }

    /// Decode a P3 or P6 image
    ///
    /// # Errors
    /// [`PnmErrors::Format`] if the stream holds another kind of image,
    /// in addition to header and raster errors
    pub fn decode_pixmap(&mut self) -> Result<Pixmap, PnmErrors> {
        self.decode_headers()?;
        self.expect_kind(PnmKind::Pixmap)?;

        let count = self.sample_count()?;
        let samples = self.read_samples(count)?;

        let pixels = samples
            .chunks_exact(3)
            .map(|x| Pixel::new(x[0], x[1], x[2]))
            .collect();
        let grid = Grid::from_vec(self.width, self.height, pixels)?;

        Ok(Pixmap::from_parts(grid, self.magic, self.max_value))
    }

    /// Decode whatever kind of image the magic identifier declares
    ///
    /// # Example
    /// ```
    /// use netpbm::{PnmDecoder, PnmImage};
    /// let mut decoder = PnmDecoder::new(b"P2\n2 1\n255\n0 255\n");
    ///
    /// let image = decoder.decode().unwrap();
    /// assert!(matches!(image, PnmImage::Graymap(_)));
    /// ```
    pub fn decode(&mut self) -> Result<PnmImage, PnmErrors> {
        self.decode_headers()?;

        match self.magic.kind() {
            PnmKind::Bitmap => self.decode_bitmap().map(PnmImage::Bitmap),
            PnmKind::Graymap => self.decode_graymap().map(PnmImage::Graymap),
            PnmKind::Pixmap => self.decode_pixmap().map(PnmImage::Pixmap)
        }
    }

    fn expect_kind(&self, kind: PnmKind) -> Result<(), PnmErrors> {
        if self.magic.kind() != kind {
            let msg = format!(
                "Expected a {kind} but found {}, which is a {}",
                self.magic,
                self.magic.kind()
            );
            return Err(PnmErrors::Format(msg));
        }
        Ok(())
    }

    fn sample_count(&self) -> Result<usize, PnmErrors> {
        self.width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(self.magic.kind().num_components()))
            .ok_or_else(|| {
                let msg = format!("Image of {}x{} is too large", self.width, self.height);
                PnmErrors::Dimension(msg)
            })
    }

    fn get_integer(&mut self, name: &'static str) -> Result<usize, PnmErrors> {
        let mut value = 0_usize;
        let mut digits = 0;

        while let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|x| x.checked_add(usize::from(byte - b'0')))
                .ok_or_else(|| PnmErrors::Dimension(format!("The {name} overflows")))?;

            digits += 1;
            self.reader.skip(1);
        }
        if digits == 0 {
            let msg = match self.reader.peek_u8() {
                Some(byte) => format!("Expected a number for {name} but found '{}'", byte as char),
                None => format!("Expected a number for {name} but reached end of stream")
            };
            return Err(PnmErrors::Dimension(msg));
        }
        Ok(value)
    }

    /// Read P4 rows, each padded to a whole number of bytes
    fn read_packed_bits(&mut self) -> Result<Vec<bool>, PnmErrors> {
        let row_bytes = self.width.div_ceil(8);
        let size = row_bytes.checked_mul(self.height).ok_or_else(|| {
            let msg = format!("Image of {}x{} is too large", self.width, self.height);
            PnmErrors::Dimension(msg)
        })?;
        let remaining = self.reader.remaining();

        let raw = self
            .reader
            .get_as_ref(size)
            .map_err(|_| PnmErrors::TruncatedData(size, remaining))?;

        let mut bits = Vec::with_capacity(self.width.saturating_mul(self.height));

        if row_bytes > 0 {
            for row in raw.chunks_exact(row_bytes) {
                // most significant bit first, low bits of the last byte are padding
                bits.extend((0..self.width).map(|x| (row[x / 8] >> (7 - (x % 8))) & 1 == 1));
            }
        }
        Ok(bits)
    }

    /// Read P1 pixels, each a single `0` or `1` with optional whitespace between
    fn read_ascii_bits(&mut self) -> Result<Vec<bool>, PnmErrors> {
        let count = self.sample_count()?;
        let strict = self.options.strict_mode();

        let mut bits = Vec::with_capacity(count.min(self.reader.remaining()));
        let mut clamped = 0;

        while bits.len() < count {
            skip_spaces(&mut self.reader);

            let Some(byte) = self.reader.peek_u8() else {
                return Err(PnmErrors::TruncatedData(count, bits.len()));
            };
            match byte {
                b'0' | b'1' => {
                    self.reader.skip(1);
                    bits.push(byte == b'1');
                }
                b'2'..=b'9' => {
                    self.reader.skip(1);
                    clamp_sample(usize::from(byte - b'0'), 1, strict, &mut clamped)?;
                    bits.push(true);
                }
                _ => skip_malformed_token(&mut self.reader, strict)?
            }
        }
        if clamped > 0 {
            warn!("{clamped} bitmap pixels above 1 were treated as 1");
        }
        Ok(bits)
    }

    /// Read `count` 8 bit samples from either raster layout
    fn read_samples(&mut self, count: usize) -> Result<Vec<u8>, PnmErrors> {
        let strict = self.options.strict_mode();
        let max_value = self.max_value;
        let mut clamped = 0;

        let samples = if self.magic.is_binary() {
            let remaining = self.reader.remaining();
            let raw = self
                .reader
                .get_as_ref(count)
                .map_err(|_| PnmErrors::TruncatedData(count, remaining))?;

            raw.iter()
                .map(|x| clamp_sample(usize::from(*x), max_value, strict, &mut clamped))
                .collect::<Result<Vec<u8>, PnmErrors>>()?
        } else {
            // every ascii sample takes at least a byte
            let mut samples = Vec::with_capacity(count.min(self.reader.remaining()));

            while samples.len() < count {
                skip_spaces(&mut self.reader);

                let Some(byte) = self.reader.peek_u8() else {
                    return Err(PnmErrors::TruncatedData(count, samples.len()));
                };
                if byte.is_ascii_digit() {
                    let value = get_decimal(&mut self.reader);
                    samples.push(clamp_sample(value, max_value, strict, &mut clamped)?);
                } else {
                    skip_malformed_token(&mut self.reader, strict)?;
                }
            }
            samples
        };
        if clamped > 0 {
            warn!("{clamped} samples above max value {max_value} were clamped");
        }
        Ok(samples)
    }
}

/// Clamp a sample to `max_value`, or reject it in strict mode
fn clamp_sample(
    value: usize, max_value: u8, strict: bool, clamped: &mut usize
) -> Result<u8, PnmErrors> {
    if value > usize::from(max_value) {
        if strict {
            return Err(PnmErrors::ValueOutOfRange(value, max_value));
        }
        *clamped += 1;
        return Ok(max_value);
    }
    Ok(value as u8)
}

/// Read a run of decimal digits, saturating instead of overflowing
fn get_decimal(reader: &mut ZByteReader) -> usize {
    let mut value = 0_usize;

    while let Some(byte) = reader.peek_u8() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(usize::from(byte - b'0'));
        reader.skip(1);
    }
    value
}

fn skip_malformed_token(reader: &mut ZByteReader, strict: bool) -> Result<(), PnmErrors> {
    let token = get_bytes_until_whitespace(reader);
    let token = String::from_utf8_lossy(token);

    if strict {
        return Err(PnmErrors::MalformedToken(token.into_owned()));
    }
    warn!("Skipping malformed token '{token}'");

    Ok(())
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(reader: &mut ZByteReader) {
    while let Some(byte) = reader.peek_u8() {
        if byte == b'#' {
            // skip the whole comment, including the newline
            reader.skip_until_false(|x| x != b'\n');
            reader.skip(1);
        } else if byte.is_ascii_whitespace() {
            reader.skip(1);
        } else {
            break;
        }
    }
}

/// Return a reference to all bytes preceding a whitespace or comment
fn get_bytes_until_whitespace<'a>(reader: &mut ZByteReader<'a>) -> &'a [u8] {
    let rest = reader.remaining_bytes();
    let len = rest
        .iter()
        .position(|x| x.is_ascii_whitespace() || *x == b'#')
        .unwrap_or(rest.len());

    reader.skip(len);
    &rest[..len]
}
