/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding, manipulating or encoding netpbm images
use std::fmt::{Debug, Display, Formatter};
use std::io;

use netpbm_core::magic::PnmKind;

/// All errors that can occur in this crate
pub enum PnmErrors {
    /// The magic identifier is unknown, or it names another
    /// kind of image than the one requested
    Format(String),
    /// Width, height or max value could not be parsed
    Dimension(String),
    /// Too large dimensions for a given dimension
    ///
    /// (dimension name, configured limit, found)
    TooLargeDimensions(&'static str, usize, usize),
    /// The stream ended before all pixels were read
    ///
    /// (expected, found)
    TruncatedData(usize, usize),
    /// Coordinates outside the image
    ///
    /// (x, y, width, height)
    Index(usize, usize, usize, usize),
    /// Rescaling from a maximum value of zero
    DivideByZero,
    /// A sample is above the maximum value of the image
    ///
    /// (sample, max value)
    ValueOutOfRange(usize, u8),
    /// A pixel token that is not a number
    MalformedToken(String),
    /// The operation cannot be applied to this kind of image
    UnsupportedOperation(&'static str, PnmKind),
    IoErrors(io::Error)
}

impl Debug for PnmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmErrors::Format(reason) => {
                writeln!(f, "Invalid format: {reason}")
            }
            PnmErrors::Dimension(reason) => {
                writeln!(f, "Invalid header value: {reason}")
            }
            PnmErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            PnmErrors::TruncatedData(expected, found) => {
                writeln!(
                    f,
                    "Truncated data, expected {expected} samples but found {found}"
                )
            }
            PnmErrors::Index(x, y, width, height) => {
                writeln!(
                    f,
                    "Coordinates ({x},{y}) are outside an image of {width}x{height}"
                )
            }
            PnmErrors::DivideByZero => {
                writeln!(f, "Cannot rescale an image whose max value is zero")
            }
            PnmErrors::ValueOutOfRange(value, max) => {
                writeln!(f, "Sample {value} is greater than max value {max}")
            }
            PnmErrors::MalformedToken(token) => {
                writeln!(f, "Expected a numeric sample but found '{token}'")
            }
            PnmErrors::UnsupportedOperation(operation, kind) => {
                writeln!(f, "Operation {operation} is not supported for a {kind}")
            }
            PnmErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err:?}")
            }
        }
    }
}

impl Display for PnmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for PnmErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PnmErrors::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for PnmErrors {
    fn from(value: io::Error) -> Self {
        PnmErrors::IoErrors(value)
    }
}
