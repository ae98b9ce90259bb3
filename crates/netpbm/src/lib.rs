/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode, manipulate and encode netpbm images
//!
//! Supports the three classic kinds of the family, each in its
//! ASCII and binary variant
//!
//! | Kind | Type | ASCII | Binary |
//! |------|------|-------|--------|
//! | one bit | [`Bitmap`] | P1 | P4 |
//! | eight bit gray | [`Graymap`] | P2 | P5 |
//! | 24 bit color | [`Pixmap`] | P3 | P6 |
//!
//! # Example
//! - Threshold a color image into a bitmap
//! ```
//! use netpbm::{Pixmap, Magic};
//!
//! let image = Pixmap::decode(b"P3\n2 1\n255\n0 0 0 255 255 255\n").unwrap();
//! let bitmap = image.to_bitmap();
//!
//! assert_eq!(bitmap.magic(), Magic::P1);
//! assert!(bitmap.get(0, 0));
//! assert!(!bitmap.get(1, 0));
//! ```
//!
//! # Features
//!  - `log`: Log header details and lenient recoveries via the `log` crate, enabled by default
//!  - `serde-support`: Serialize [`ImageMetadata`] and the core value types
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate
)]

pub use netpbm_core;
pub use netpbm_core::magic::{Magic, PnmKind};
pub use netpbm_core::options::DecoderOptions;
pub use netpbm_core::pixel::{Pixel, Point};

pub use crate::bitmap::Bitmap;
pub use crate::decoder::PnmDecoder;
pub use crate::encoder::PnmEncoder;
pub use crate::errors::PnmErrors;
pub use crate::graymap::Graymap;
pub use crate::grid::Grid;
pub use crate::image::PnmImage;
pub use crate::metadata::ImageMetadata;
pub use crate::pixmap::Pixmap;

mod bitmap;
mod decoder;
mod draw;
mod encoder;
pub mod errors;
mod file_io;
pub mod filters;
mod graymap;
mod grid;
mod image;
pub mod metadata;
mod pixmap;
mod serde;
pub mod traits;
