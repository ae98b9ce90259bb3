/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_core::pixel::Pixel;

/// A pixel made of one or more 8 bit channels that
/// share a single maximum value.
pub trait Sample: Copy {
    /// Apply `f` to every channel of the sample
    fn map_channels<F: Fn(u8) -> u8>(self, f: F) -> Self;

    /// Return the largest channel of this sample
    fn max_channel(self) -> u8;
}

macro_rules! sample_for_int {
    ($int:tt) => {
        impl Sample for $int {
            #[inline(always)]
            fn map_channels<F: Fn(u8) -> u8>(self, f: F) -> $int {
                f(self)
            }
            #[inline(always)]
            fn max_channel(self) -> u8 {
                self
            }
        }
    };
}

sample_for_int!(u8);

impl Sample for Pixel {
    #[inline(always)]
    fn map_channels<F: Fn(u8) -> u8>(self, f: F) -> Pixel {
        Pixel {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b)
        }
    }
    #[inline(always)]
    fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}
