/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm::{Bitmap, Magic, PnmErrors};

#[test]
fn decode_ascii_diagonal() {
    let image = Bitmap::decode(b"P1\n2 2\n1 0\n0 1\n").unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.magic(), Magic::P1);
    assert!(image.get(0, 0));
    assert!(!image.get(1, 0));
    assert!(!image.get(0, 1));
    assert!(image.get(1, 1));
}

#[test]
fn decode_ascii_without_separators() {
    let image = Bitmap::decode(b"P1\n# comment\n3 2\n101\n010").unwrap();

    assert_eq!(
        image.grid().data(),
        &[true, false, true, false, true, false]
    );
}

#[test]
fn decode_packed_rows_skip_padding() {
    // width 10 needs two bytes per row, the low 6 bits are padding
    let image = Bitmap::decode(b"P4\n10 2\n\x80\x7f\x00\xc0").unwrap();

    assert_eq!(image.magic(), Magic::P4);
    let row0: Vec<usize> = (0..10).filter(|x| image.get(*x, 0)).collect();
    let row1: Vec<usize> = (0..10).filter(|x| image.get(*x, 1)).collect();

    assert_eq!(row0, [0, 9]);
    assert_eq!(row1, [8, 9]);
}

#[test]
fn encode_ascii_rows() {
    let image = Bitmap::decode(b"P1 3 2 1 1 0 0 0 1").unwrap();

    assert_eq!(image.encode().unwrap(), b"P1\n3 2\n1 1 0\n0 0 1\n");
}

#[test]
fn packed_round_trip() {
    let mut image = Bitmap::new(13, 3);
    image.set_magic(Magic::P4).unwrap();

    for (x, y) in [(0, 0), (12, 0), (7, 1), (8, 2), (12, 2)] {
        image.set(x, y, true).unwrap();
    }
    let encoded = image.encode().unwrap();

    assert_eq!(Bitmap::decode(&encoded).unwrap(), image);
}

#[test]
fn out_of_range_access() {
    let mut image = Bitmap::new(2, 2);

    assert!(!image.get(5, 5));
    assert!(matches!(
        image.set(2, 0, true),
        Err(PnmErrors::Index(2, 0, 2, 2))
    ));
}

#[test]
fn set_magic_keeps_kind() {
    let mut image = Bitmap::new(1, 1);

    assert!(image.set_magic(Magic::P4).is_ok());
    assert!(matches!(image.set_magic(Magic::P5), Err(PnmErrors::Format(_))));
    assert_eq!(image.magic(), Magic::P4);
}

#[test]
fn invert_flip_flop_rotate() {
    // 1 0 0
    // 1 1 0
    let mut image = Bitmap::decode(b"P1\n3 2\n100\n110\n").unwrap();

    image.invert();
    assert_eq!(image.encode().unwrap(), b"P1\n3 2\n0 1 1\n0 0 1\n");
    image.invert();

    image.flip();
    assert_eq!(image.encode().unwrap(), b"P1\n3 2\n0 0 1\n0 1 1\n");
    image.flip();

    image.flop();
    assert_eq!(image.encode().unwrap(), b"P1\n3 2\n1 1 0\n1 0 0\n");
    image.flop();

    image.rotate_90_cw();
    assert_eq!(image.dimensions(), (2, 3));
    assert_eq!(image.encode().unwrap(), b"P1\n2 3\n1 1\n1 0\n0 0\n");
}

#[test]
fn edit_through_grid() {
    let mut image = Bitmap::new(2, 2);
    image.grid_mut().set(1, 1, true).unwrap();

    assert!(image.get(1, 1));
    assert_eq!(image.encode().unwrap(), b"P1\n2 2\n0 0\n0 1\n");
}
