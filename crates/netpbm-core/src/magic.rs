/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Magic identifiers and image kinds understood by the netpbm family.
use core::fmt::{Display, Formatter};

/// The three pixel kinds of the netpbm family
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PnmKind {
    /// One bit per pixel, `P1` and `P4`
    Bitmap,
    /// One 8 bit intensity per pixel, `P2` and `P5`
    Graymap,
    /// Three 8 bit channels per pixel, `P3` and `P6`
    Pixmap
}

impl PnmKind {
    /// Number of samples making up a single pixel
    ///
    /// E.g. Pixmap returns 3 since it contains R,G and B samples to make up a pixel
    pub const fn num_components(self) -> usize {
        match self {
            Self::Bitmap | Self::Graymap => 1,
            Self::Pixmap => 3
        }
    }
    /// Whether the header of this kind carries a maximum value
    pub const fn has_max_value(self) -> bool {
        !matches!(self, Self::Bitmap)
    }
}

/// A magic identifier, the first two bytes of every netpbm file
///
/// Each one declares the pixel kind and whether pixels are stored as
/// ASCII tokens or as packed binary samples.
///
/// ```text
/// ┌────────┬───────┬────────┐
/// │ kind   │ ASCII │ binary │
/// ├────────┼───────┼────────┤
/// │ bitmap │  P1   │   P4   │
/// │ gray   │  P2   │   P5   │
/// │ color  │  P3   │   P6   │
/// └────────┴───────┴────────┘
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Magic {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6
}

impl Magic {
    /// Create the magic for a given kind and storage
    pub const fn new(kind: PnmKind, binary: bool) -> Magic {
        match (kind, binary) {
            (PnmKind::Bitmap, false) => Magic::P1,
            (PnmKind::Graymap, false) => Magic::P2,
            (PnmKind::Pixmap, false) => Magic::P3,
            (PnmKind::Bitmap, true) => Magic::P4,
            (PnmKind::Graymap, true) => Magic::P5,
            (PnmKind::Pixmap, true) => Magic::P6
        }
    }
    /// Parse a magic identifier from the first two bytes of a file
    ///
    /// Returns `None` if the bytes do not form a supported identifier
    ///
    /// ```
    /// use netpbm_core::magic::Magic;
    /// assert_eq!(Magic::from_bytes([b'P', b'4']), Some(Magic::P4));
    /// assert_eq!(Magic::from_bytes([b'P', b'7']), None);
    /// ```
    pub const fn from_bytes(bytes: [u8; 2]) -> Option<Magic> {
        match bytes {
            [b'P', b'1'] => Some(Magic::P1),
            [b'P', b'2'] => Some(Magic::P2),
            [b'P', b'3'] => Some(Magic::P3),
            [b'P', b'4'] => Some(Magic::P4),
            [b'P', b'5'] => Some(Magic::P5),
            [b'P', b'6'] => Some(Magic::P6),
            _ => None
        }
    }
    /// The textual identifier as written in the header
    pub const fn as_str(self) -> &'static str {
        match self {
            Magic::P1 => "P1",
            Magic::P2 => "P2",
            Magic::P3 => "P3",
            Magic::P4 => "P4",
            Magic::P5 => "P5",
            Magic::P6 => "P6"
        }
    }
    /// The pixel kind declared by this identifier
    pub const fn kind(self) -> PnmKind {
        match self {
            Magic::P1 | Magic::P4 => PnmKind::Bitmap,
            Magic::P2 | Magic::P5 => PnmKind::Graymap,
            Magic::P3 | Magic::P6 => PnmKind::Pixmap
        }
    }
    /// Whether pixels are stored as raw bytes instead of
    /// ASCII tokens
    pub const fn is_binary(self) -> bool {
        matches!(self, Magic::P4 | Magic::P5 | Magic::P6)
    }
    /// Return the identifier of `kind` with the same
    /// ASCII/binary storage as `self`
    ///
    /// ```
    /// use netpbm_core::magic::{Magic, PnmKind};
    /// assert_eq!(Magic::P6.with_kind(PnmKind::Graymap), Magic::P5);
    /// assert_eq!(Magic::P2.with_kind(PnmKind::Bitmap), Magic::P1);
    /// ```
    pub const fn with_kind(self, kind: PnmKind) -> Magic {
        Magic::new(kind, self.is_binary())
    }
}

impl Display for Magic {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Display for PnmKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bitmap => write!(f, "bitmap"),
            Self::Graymap => write!(f, "graymap"),
            Self::Pixmap => write!(f, "pixmap")
        }
    }
}
