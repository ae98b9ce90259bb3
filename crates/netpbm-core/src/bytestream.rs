/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! netpbm headers mix ASCII tokens, comments and (for the binary variants)
//! raw samples, so the reader exposes byte-at-a-time access with peeking
//! plus bulk access to whatever is left of the stream.
pub use reader::ZByteReader;

mod reader;
