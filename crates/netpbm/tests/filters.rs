/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm::filters::{Flip, Flop, Invert, Rotate90, SetMaxValue};
use netpbm::traits::OperationsTrait;
use netpbm::{PnmErrors, PnmImage, PnmKind};

fn graymap() -> PnmImage {
    // 0 1 2
    // 3 4 5
    PnmImage::decode(b"P2 3 2 5 0 1 2 3 4 5").unwrap()
}

#[test]
fn operations_match_image_methods() {
    let operations: [&dyn OperationsTrait; 4] = [&Invert::new(), &Flip::new(), &Flop::new(), &Rotate90::new()];

    for operation in operations {
        let mut image = graymap();
        operation.execute(&mut image).unwrap();

        let mut expected = graymap().as_graymap().unwrap().clone();
        match operation.name() {
            "Invert" => expected.invert(),
            "Flip" => expected.flip(),
            "Flop" => expected.flop(),
            "Rotate 90" => expected.rotate_90_cw(),
            name => panic!("Unexpected operation {name}")
        }
        assert_eq!(image, PnmImage::Graymap(expected), "{}", operation.name());
    }
}

#[test]
fn set_max_value_on_graymap() {
    let mut image = graymap();
    SetMaxValue::new(10).execute(&mut image).unwrap();

    let graymap = image.as_graymap().unwrap();
    assert_eq!(graymap.max_value(), 10);
    assert_eq!(graymap.grid().data(), &[0, 2, 4, 6, 8, 10]);
}

#[test]
fn set_max_value_on_bitmap_is_unsupported() {
    let mut image = PnmImage::decode(b"P1 1 1 1").unwrap();
    let err = SetMaxValue::new(10).execute(&mut image).unwrap_err();

    assert!(matches!(
        err,
        PnmErrors::UnsupportedOperation("Set max value", PnmKind::Bitmap)
    ));
}

#[test]
fn set_max_value_from_zero_is_an_error() {
    let mut image = PnmImage::decode(b"P3 1 1 0 0 0 0").unwrap();
    let err = SetMaxValue::new(10).execute(&mut image).unwrap_err();

    assert!(matches!(err, PnmErrors::DivideByZero));
}

#[test]
fn rotate_any_kind() {
    let mut image = PnmImage::decode(b"P1 3 1 1 0 0").unwrap();
    Rotate90::new().execute(&mut image).unwrap();

    assert_eq!(image.dimensions(), (1, 3));
    assert_eq!(image.encode().unwrap(), b"P1\n1 3\n1\n0\n0\n");
}
