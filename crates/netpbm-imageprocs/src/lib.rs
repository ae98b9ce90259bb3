/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `netpbm`
//!
//! The routines work on flat row-major slices and are generic over the
//! sample type, they know nothing about headers or magic identifiers.
//! The image types in the `netpbm` crate own the pixel storage and call
//! into here.
//!
//! # Example
//! - Mirror a 3x2 image left to right
//! ```
//! use netpbm_imageprocs::flip::horizontal_flip;
//! let mut pixels = [1, 2, 3,
//!                   4, 5, 6];
//! horizontal_flip(&mut pixels, 3);
//! assert_eq!(pixels, [3, 2, 1,
//!                     6, 5, 4]);
//! ```
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
    clippy::wildcard_imports,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

pub mod depth;
pub mod draw;
pub mod flip;
pub mod grayscale;
pub mod invert;
pub mod rotate;
pub mod threshold;
pub mod traits;
pub mod transpose;
