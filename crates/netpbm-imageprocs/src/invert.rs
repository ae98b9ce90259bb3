/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::traits::Sample;

/// Invert every channel of every pixel
///
/// The formula for inverting a channel is
/// `pixel[x,y] = max_value - pixel[x,y]`, where `max_value` is the image
/// ceiling rather than the type maximum.
///
/// Channels above `max_value` are not expected, they saturate at zero.
pub fn invert<T: Sample>(in_image: &mut [T], max_value: u8) {
    for pixel in in_image.iter_mut() {
        *pixel = pixel.map_channels(|x| max_value.saturating_sub(x));
    }
}

/// Invert a one bit image, ink becomes paper and vice versa
pub fn invert_bits(in_image: &mut [bool]) {
    in_image.iter_mut().for_each(|x| *x = !*x);
}
