/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a byte-stream reader
///
/// This provides an interface similar to [std::io::Cursor] but
/// with the exception of returning defaults instead of errors for the
/// infallible getters, callers are expected to check [`has`](Self::has)
/// before reading.
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `num` bytes ahead of the stream.
    ///
    /// Skipping past the end clamps the position to the end
    /// of the stream
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Return whether the underlying buffer
    /// has `num` bytes available for reading
    ///
    /// ```
    /// use netpbm_core::bytestream::ZByteReader;
    /// let data = [0_u8;120];
    /// let reader = ZByteReader::new(&data);
    /// assert!(reader.has(3));
    /// assert!(!reader.has(121));
    /// ```
    #[inline]
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }
    /// Get number of bytes available in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }

    /// Retrieve a byte from the underlying stream
    /// returning 0 if there are no more bytes available
    ///
    /// This means 0 might indicate a bit or an end of stream, callers
    /// check [`has`](Self::has) before reading.
    #[inline]
    pub fn get_u8(&mut self) -> u8 {
        let byte = *self.stream.get(self.position).unwrap_or(&0);

        self.position += usize::from(self.position < self.stream.len());
        byte
    }

    /// Look at the next byte without consuming it
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Get a reference to the next `num` bytes, consuming them
    /// on success.
    ///
    /// Returns an error if fewer than `num` bytes remain, in which
    /// case the position is not changed.
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], &'static str> {
        let end = self.position.checked_add(num).ok_or(ERROR_MSG)?;

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                self.position = end;
                Ok(bytes)
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Return a reference to all bytes that have not yet been read
    ///
    /// This does not consume the bytes.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        self.stream.get(self.position..).unwrap_or(&[])
    }

    /// Skip bytes while `func` returns true for them, stopping at
    /// the first byte for which it returns false (which is not consumed)
    /// or at the end of the stream.
    pub fn skip_until_false<F: Fn(u8) -> bool>(&mut self, func: F) {
        while let Some(byte) = self.peek_u8() {
            if !(func)(byte) {
                break;
            }
            self.position += 1;
        }
    }
}
