/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Mirror an image around one of its central axes, in place.

/// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
/// A zero `width` is treated as an empty image.
pub fn horizontal_flip<T: Copy>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        let (left_to_right, right_to_left) = width_chunks.split_at_mut(width / 2);

        // iterate and swap, the middle column of odd widths stays put
        for (ltr, rtl) in left_to_right.iter_mut().zip(right_to_left.iter_mut().rev()) {
            core::mem::swap(ltr, rtl);
        }
    }
}

/// Flip the image vertically, reflecting the rows around the central x-axis
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
/// A zero `width` is treated as an empty image.
pub fn vertical_flip<T: Copy>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );
    let rows = in_out_image.len() / width;
    // divide array into two, an odd middle row belongs to neither half
    let (top, bottom) = in_out_image.split_at_mut((rows / 2) * width);

    for (top_row, bottom_row) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        top_row.swap_with_slice(bottom_row);
    }
}

#[cfg(test)]
mod tests {
    use crate::flip::{horizontal_flip, vertical_flip};

    #[test]
    fn horizontal_flip_odd_width() {
        let mut image = [1, 2, 3, 4, 5, 6];
        horizontal_flip(&mut image, 3);
        assert_eq!(image, [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn vertical_flip_odd_height() {
        let mut image = [1, 2, 3, 4, 5, 6];
        vertical_flip(&mut image, 2);
        assert_eq!(image, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn flips_are_involutions() {
        use nanorand::Rng;

        let mut rng = nanorand::WyRand::new_seed(0x5eed);
        let (width, height) = (13, 7);

        let mut image = vec![0_u8; width * height];
        rng.fill(&mut image);
        let original = image.clone();

        horizontal_flip(&mut image, width);
        assert_ne!(image, original);
        horizontal_flip(&mut image, width);
        assert_eq!(image, original);

        vertical_flip(&mut image, width);
        vertical_flip(&mut image, width);
        assert_eq!(image, original);
    }

    #[test]
    fn zero_width_is_a_no_op() {
        let mut image: [u8; 0] = [];
        horizontal_flip(&mut image, 0);
        vertical_flip(&mut image, 0);
    }
}
