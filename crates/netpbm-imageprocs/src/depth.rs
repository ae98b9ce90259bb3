/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::num::NonZeroU8;

use crate::traits::Sample;

/// Rescale an image from one maximum value to another
///
/// This is a simple proportional rescaling, every channel is mapped
/// with `new = floor(old * new_max / old_max)`, so `old_max` maps to `new_max`
/// and zero stays at zero, squeezing or stretching everything else in between.
///
/// The computation is exact integer arithmetic.
///
/// # Arguments
///  - `in_out_image`: Pixels to rescale in place
///  - `old_max`: The maximum value the pixels are currently relative to
///  - `new_max`: The maximum value the pixels should be relative to
pub fn rescale_max<T: Sample>(in_out_image: &mut [T], old_max: NonZeroU8, new_max: u8) {
    let old_max = u32::from(old_max.get());
    let new_max = u32::from(new_max);

    for pixel in in_out_image.iter_mut() {
        *pixel = pixel.map_channels(|x| {
            // channels above the old maximum would overshoot, keep them at the ceiling
            ((u32::from(x) * new_max) / old_max).min(new_max) as u8
        });
    }
}
