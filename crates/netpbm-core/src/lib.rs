/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the netpbm crates
//!
//! This crate provides a set of core routines shared
//! by the decoders, encoders and image routines under the `netpbm` umbrella
//!
//! It currently contains
//!
//! - A bytestream reader suited for the plain-text/binary netpbm headers
//! - Magic identifiers and image kinds shared by all formats
//! - Pixel and point value types
//! - Decoder options
//!
//! This library is `#[no_std]` with `alloc` needed for owned strings
//! in the serde implementations.
//!
//! # Features
//!  - `std`: Enables the standard library.
//!
//!  - `log`: Route the crate-wide logging macros to the [`log`](https://docs.rs/log) crate,
//!     without it the macros in [`log`] compile to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod bytestream;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod magic;
pub mod options;
pub mod pixel;
pub mod serde;

#[cfg(feature = "log")]
pub use log;
