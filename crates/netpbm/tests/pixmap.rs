/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm::{Magic, Pixel, Pixmap, PnmErrors};

fn sample() -> Pixmap {
    // [red  , green]
    // [blue , white]
    Pixmap::decode(b"P3\n2 2\n255\n255 0 0  0 255 0\n0 0 255  255 255 255\n").unwrap()
}

#[test]
fn decode_ascii_triplets() {
    let image = sample();

    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.max_value(), 255);
    assert_eq!(image.get(0, 0), Some(Pixel::new(255, 0, 0)));
    assert_eq!(image.get(1, 1), Some(Pixel::new(255, 255, 255)));
    assert_eq!(image.get(0, 2), None);
}

#[test]
fn decode_binary_triplets() {
    let image = Pixmap::decode(b"P6\n2 1\n100\n\x01\x02\x03\x64\x00\x32").unwrap();

    assert_eq!(image.magic(), Magic::P6);
    assert_eq!(image.get(0, 0), Some(Pixel::new(1, 2, 3)));
    assert_eq!(image.get(1, 0), Some(Pixel::new(100, 0, 50)));
}

#[test]
fn binary_channels_clamp_to_max() {
    let image = Pixmap::decode(b"P6 1 1 10\n\x0b\x05\xff").unwrap();

    assert_eq!(image.get(0, 0), Some(Pixel::new(10, 5, 10)));
}

#[test]
fn encode_layout() {
    let image = sample();

    assert_eq!(
        image.encode().unwrap(),
        b"P3\n2 2\n255\n255 0 0 0 255 0\n0 0 255 255 255 255\n"
    );
}

#[test]
fn set_rejects_any_channel_above_max() {
    let mut image = Pixmap::new(1, 1, 200);

    assert!(matches!(
        image.set(0, 0, Pixel::new(0, 201, 0)),
        Err(PnmErrors::ValueOutOfRange(201, 200))
    ));
    assert!(image.set(0, 0, Pixel::new(200, 0, 0)).is_ok());
}

#[test]
fn invert_per_channel() {
    let mut image = Pixmap::decode(b"P3 1 1 100 10 0 100").unwrap();
    image.invert();

    assert_eq!(image.get(0, 0), Some(Pixel::new(90, 100, 0)));
}

#[test]
fn set_max_value_per_channel() {
    let mut image = Pixmap::decode(b"P3 1 1 100 50 99 100").unwrap();
    image.set_max_value(10).unwrap();

    assert_eq!(image.max_value(), 10);
    assert_eq!(image.get(0, 0), Some(Pixel::new(5, 9, 10)));
}

#[test]
fn flip_and_flop() {
    let mut image = sample();

    image.flip();
    assert_eq!(image.get(0, 0), Some(Pixel::new(0, 255, 0)));
    assert_eq!(image.get(0, 1), Some(Pixel::new(255, 255, 255)));
    image.flip();

    image.flop();
    assert_eq!(image.get(0, 0), Some(Pixel::new(0, 0, 255)));
    assert_eq!(image.get(1, 0), Some(Pixel::new(255, 255, 255)));
}

#[test]
fn rotate_swaps_dimensions() {
    // 3x1 strip becomes a 1x3 column, left end on top
    let mut image = Pixmap::decode(b"P3 3 1 9 1 1 1 2 2 2 3 3 3").unwrap();
    image.rotate_90_cw();

    assert_eq!(image.dimensions(), (1, 3));
    assert_eq!(image.get(0, 0), Some(Pixel::new(1, 1, 1)));
    assert_eq!(image.get(0, 2), Some(Pixel::new(3, 3, 3)));
}

#[test]
fn to_graymap_is_mean() {
    let image = Pixmap::decode(b"P6 2 1 255\n\x0a\x14\x1e\xff\xff\xfe").unwrap();
    let gray = image.to_graymap();

    assert_eq!(gray.magic(), Magic::P5);
    assert_eq!(gray.max_value(), 255);
    // (10+20+30)/3 = 20, (255+255+254)/3 = 254
    assert_eq!(gray.grid().data(), &[20, 254]);
}

#[test]
fn to_bitmap_thresholds_luminance() {
    let image = sample();
    let bitmap = image.to_bitmap();

    assert_eq!(bitmap.magic(), Magic::P1);
    // pure primaries have luminance 85 < 127
    assert!(bitmap.get(0, 0));
    assert!(bitmap.get(1, 0));
    assert!(bitmap.get(0, 1));
    assert!(!bitmap.get(1, 1));
}
