/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Drawing primitives for color images
//!
//! Coordinates outside the canvas are silently clipped and colors
//! are clamped to the max value of the image.
use netpbm_core::pixel::{Pixel, Point};
use netpbm_imageprocs::draw::{draw_filled_rectangle, draw_line, draw_rectangle, draw_triangle};
use netpbm_imageprocs::traits::Sample;

use crate::pixmap::Pixmap;

impl Pixmap {
    fn clamp_color(&self, color: Pixel) -> Pixel {
        let max_value = self.max_value();
        color.map_channels(|x| x.min(max_value))
    }

    /// Draw a line from `p1` to `p2`, both endpoints included
    ///
    /// # Example
    /// ```
    /// use netpbm::{Pixel, Pixmap, Point};
    /// let mut image = Pixmap::new(4, 4, 255);
    /// let red = Pixel::new(255, 0, 0);
    ///
    /// image.draw_line(Point::new(0, 0), Point::new(3, 3), red);
    ///
    /// assert_eq!(image.get(2, 2), Some(red));
    /// assert_eq!(image.get(2, 1), Some(Pixel::default()));
    /// ```
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Pixel) {
        let color = self.clamp_color(color);
        let width = self.dimensions().0;

        draw_line(self.grid_mut().data_mut(), width, p1, p2, color);
    }

    /// Draw the outline of a rectangle with its top left corner at `origin`
    ///
    /// The corners are `origin`, `origin + (width, 0)`, `origin + (width, height)`
    /// and `origin + (0, height)`.
    pub fn draw_rectangle(&mut self, origin: Point, width: isize, height: isize, color: Pixel) {
        let color = self.clamp_color(color);
        let canvas_width = self.dimensions().0;

        draw_rectangle(self.grid_mut().data_mut(), canvas_width, origin, width, height, color);
    }

    /// Draw a rectangle outline and fill everything inside it
    pub fn draw_filled_rectangle(
        &mut self, origin: Point, width: isize, height: isize, color: Pixel
    ) {
        let color = self.clamp_color(color);
        let canvas_width = self.dimensions().0;

        draw_filled_rectangle(self.grid_mut().data_mut(), canvas_width, origin, width, height, color);
    }

    /// Draw the outline of a triangle
    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Pixel) {
        let color = self.clamp_color(color);
        let width = self.dimensions().0;

        draw_triangle(self.grid_mut().data_mut(), width, p1, p2, p3, color);
    }
}
