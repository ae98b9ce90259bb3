/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::errors::PnmErrors;

/// Read a whole file into memory
pub(crate) fn read_file<P: AsRef<Path>>(file: P) -> Result<Vec<u8>, PnmErrors> {
    let mut reader = BufReader::new(File::open(file)?);
    let mut data = Vec::new();

    reader.read_to_end(&mut data)?;

    Ok(data)
}

/// Create or truncate `file`, let `encode` write to it and flush
pub(crate) fn write_file<P, F>(file: P, encode: F) -> Result<(), PnmErrors>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), PnmErrors>
{
    let mut writer = BufWriter::new(
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file)?
    );
    encode(&mut writer)?;
    writer.flush()?;

    Ok(())
}
