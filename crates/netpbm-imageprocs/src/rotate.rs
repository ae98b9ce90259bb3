/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::flip::horizontal_flip;
use crate::transpose::transpose;

/// Rotate a `width` x `height` image 90 degrees clockwise into `out_image`
///
/// The output is a `height` x `width` image, i.e. the caller must swap
/// the dimensions it stores.
///
/// ```text
///                   ┌──────┐
///┌─────────┐        │ ───► │
///│ ▲       │        │ 90   │
///│ │       │        │      │
///└─┴───────┘        │      │
///                   └──────┘
/// ```
///
/// The lower left pixel becomes the top left pixel:
///
/// ```text
/// [1,2,3]    [4,1]
/// [4,5,6] -> [5,2]
///            [6,3]
/// ```
///
/// This is a transpose followed by mirroring each output row, which is
/// valid for any dimensions as the transpose writes to a separate buffer.
pub fn rotate_90<T: Copy>(in_image: &[T], out_image: &mut [T], width: usize, height: usize) {
    transpose(in_image, out_image, width, height);
    horizontal_flip(out_image, height);
}

#[cfg(test)]
mod tests {
    use crate::rotate::rotate_90;

    #[test]
    fn rotate_non_square() {
        let in_image = [1, 2, 3, 4, 5, 6];
        let mut out_image = [0; 6];

        rotate_90(&in_image, &mut out_image, 3, 2);
        assert_eq!(out_image, [4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn four_rotations_restore_image() {
        let (mut width, mut height) = (5, 3);
        let original: Vec<u16> = (0..15).collect();

        let mut image = original.clone();
        let mut scratch = vec![0; image.len()];

        for _ in 0..4 {
            rotate_90(&image, &mut scratch, width, height);
            core::mem::swap(&mut image, &mut scratch);
            core::mem::swap(&mut width, &mut height);
        }
        assert_eq!((width, height), (5, 3));
        assert_eq!(image, original);
    }
}
