/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Transpose a `width` x `height` matrix into a `height` x `width` one
///
/// `out_matrix[j][i] = in_matrix[i][j]`, both matrices are row-major.
///
/// # Panics
/// If either matrix length differs from `width * height`
pub fn transpose<T: Copy>(in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize) {
    let dimensions = width * height;
    assert_eq!(
        in_matrix.len(),
        dimensions,
        "In matrix dimensions do not match width and height"
    );

    assert_eq!(
        out_matrix.len(),
        dimensions,
        "Out matrix dimensions do not match width and height"
    );

    for i in 0..height {
        for j in 0..width {
            out_matrix[(j * height) + i] = in_matrix[(i * width) + j];
        }
    }
}
