/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Threshold an 8 bit channel into one bit ink
///
/// Samples strictly below `threshold` become `true` (ink),
/// everything else becomes `false` (paper).
///
/// # Panics
/// If `in_channel` and `out_bits` lengths differ
pub fn threshold_to_bits(in_channel: &[u8], threshold: u8, out_bits: &mut [bool]) {
    assert_eq!(
        in_channel.len(),
        out_bits.len(),
        "Input and output lengths do not match"
    );

    for (value, bit) in in_channel.iter().zip(out_bits.iter_mut()) {
        *bit = *value < threshold;
    }
}
