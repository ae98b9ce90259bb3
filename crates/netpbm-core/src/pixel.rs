/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel and coordinate value types

/// A single color pixel made of three independent 8 bit channels
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }
    /// Channels in R, G, B order
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Pixel { r, g, b }
    }
}

/// An integer coordinate, `x` grows to the right and `y` grows downwards
///
/// Points may lie outside an image, drawing routines clip them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: isize,
    pub y: isize
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Point {
        Point { x, y }
    }
}
