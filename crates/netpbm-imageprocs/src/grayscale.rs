/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reduce RGB pixels to a single luminance channel
use netpbm_core::pixel::Pixel;

/// Convert RGB pixels to luminance using an unweighted mean
///
/// `luma = floor((r + g + b) / 3)`, computed in `u16` so the
/// sum never overflows.
///
/// # Panics
/// If `in_pixels` and `out_luma` lengths differ
pub fn rgb_to_luminance(in_pixels: &[Pixel], out_luma: &mut [u8]) {
    assert_eq!(
        in_pixels.len(),
        out_luma.len(),
        "Input and output lengths do not match"
    );

    for (pixel, luma) in in_pixels.iter().zip(out_luma.iter_mut()) {
        let sum = u16::from(pixel.r) + u16::from(pixel.g) + u16::from(pixel.b);
        *luma = (sum / 3) as u8;
    }
}

#[cfg(test)]
mod tests {
    use netpbm_core::pixel::Pixel;

    use crate::grayscale::rgb_to_luminance;

    #[test]
    fn luminance_is_floor_of_mean() {
        let pixels = [
            Pixel::new(255, 255, 255),
            Pixel::new(1, 1, 0),
            Pixel::new(10, 20, 30)
        ];
        let mut luma = [0; 3];
        rgb_to_luminance(&pixels, &mut luma);
        assert_eq!(luma, [255, 0, 20]);
    }
}
