/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A rectangular pixel container shared by all image kinds

use netpbm_imageprocs::flip::{horizontal_flip, vertical_flip};
use netpbm_imageprocs::rotate::rotate_90;

use crate::errors::PnmErrors;

/// A `width` x `height` matrix of pixels
///
/// Pixels are stored row-major in a single allocation with the
/// origin at the top left, so every row has exactly `width` pixels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width:  usize,
    height: usize,
    data:   Vec<T>
}

impl<T: Copy + Default> Grid<T> {
    /// Create a grid with every pixel set to `T::default()`
    pub fn new(width: usize, height: usize) -> Grid<T> {
        Grid::fill(width, height, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every pixel set to `value`
    pub fn fill(width: usize, height: usize, value: T) -> Grid<T> {
        Grid {
            width,
            height,
            data: vec![value; width * height]
        }
    }

    /// Create a grid from row-major pixels
    ///
    /// # Errors
    /// If `data.len()` is not `width * height`
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Grid<T>, PnmErrors> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            PnmErrors::Dimension(format!("{width}x{height} overflows the address space"))
        })?;

        if data.len() != expected {
            return Err(PnmErrors::Dimension(format!(
                "Expected {expected} pixels for a {width}x{height} grid but found {}",
                data.len()
            )));
        }
        Ok(Grid {
            width,
            height,
            data
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Return the pixel at column `x` and row `y` or `None`
    /// if it lies outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        self.index(x, y).map(|pos| self.data[pos])
    }

    /// Set the pixel at column `x` and row `y`
    ///
    /// # Errors
    /// [`PnmErrors::Index`] if the coordinates lie outside the grid
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<(), PnmErrors> {
        let pos = self
            .index(x, y)
            .ok_or(PnmErrors::Index(x, y, self.width, self.height))?;

        self.data[pos] = value;
        Ok(())
    }

    /// Return row `y` or `None` if it lies outside the grid
    pub fn row(&self, y: usize) -> Option<&[T]> {
        if y < self.height {
            Some(&self.data[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    /// Iterate over the rows from top to bottom
    ///
    /// Exactly `height` rows are returned, even when `width` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| &self.data[y * self.width..(y + 1) * self.width])
    }

    /// Return the pixels in row-major order
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Mirror columns left to right in place
    pub fn flip(&mut self) {
        horizontal_flip(&mut self.data, self.width);
    }

    /// Mirror rows top to bottom in place
    pub fn flop(&mut self) {
        vertical_flip(&mut self.data, self.width);
    }

    /// Rotate 90 degrees clockwise, swapping width and height
    ///
    /// The pixels are reindexed into a freshly allocated buffer
    pub fn rotate_90_cw(&mut self) {
        let mut rotated = self.data.clone();

        rotate_90(&self.data, &mut rotated, self.width, self.height);

        self.data = rotated;
        core::mem::swap(&mut self.width, &mut self.height);
    }

    /// Create a new grid of the same dimensions by applying `func` to every pixel
    pub fn map<U: Copy, F: Fn(T) -> U>(&self, func: F) -> Grid<U> {
        Grid {
            width:  self.width,
            height: self.height,
            data:   self.data.iter().map(|x| func(*x)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::PnmErrors;
    use crate::grid::Grid;

    fn sample() -> Grid<u8> {
        // [1,2,3]
        // [4,5,6]
        Grid::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn get_and_set() {
        let mut grid = sample();
        assert_eq!(grid.get(2, 1), Some(6));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);

        grid.set(0, 1, 9).unwrap();
        assert_eq!(grid.row(1), Some(&[9, 5, 6][..]));

        assert!(matches!(grid.set(3, 1, 0), Err(PnmErrors::Index(3, 1, 3, 2))));
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(Grid::from_vec(2, 2, vec![0_u8; 3]).is_err());
    }

    #[test]
    fn rotate_clockwise() {
        let mut grid = sample();
        grid.rotate_90_cw();
        assert_eq!(grid.dimensions(), (2, 3));
        // new[i][j] = old[height-1-j][i]
        assert_eq!(grid.data(), &[4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn flip_and_flop() {
        let mut grid = sample();
        grid.flip();
        assert_eq!(grid.data(), &[3, 2, 1, 6, 5, 4]);
        grid.flip();
        grid.flop();
        assert_eq!(grid.data(), &[4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn rows_of_empty_width() {
        let grid: Grid<u8> = Grid::new(0, 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(<[u8]>::is_empty));
    }

    #[test]
    fn map_keeps_dimensions() {
        let grid = sample().map(|x| x > 3);
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.into_vec(), vec![false, false, false, true, true, true]);
    }
}
