/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use netpbm::{Bitmap, Graymap, Magic, Pixel, Pixmap, PnmErrors, PnmImage, Point};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("netpbm-{}-{name}", std::process::id()))
}

#[test]
fn save_and_open_pixmap() {
    let path = temp_path("drawing.ppm");

    let mut image = Pixmap::new(8, 6, 255);
    image.set_magic(Magic::P6).unwrap();
    image.draw_triangle(Point::new(0, 0), Point::new(7, 2), Point::new(3, 5), Pixel::new(9, 8, 7));
    image.save(&path).unwrap();

    let reopened = Pixmap::open(&path).unwrap();
    assert_eq!(reopened, image);

    let any = PnmImage::open(&path).unwrap();
    assert_eq!(any.magic(), Magic::P6);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn save_truncates_existing_file() {
    let path = temp_path("truncate.pgm");

    Graymap::new(20, 20, 255).save(&path).unwrap();
    Graymap::new(1, 1, 255).save(&path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"P2\n1 1\n255\n0\n");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn converted_image_saves() {
    let path = temp_path("converted.pbm");

    let gray = Graymap::decode(b"P2 2 1 10 0 10").unwrap();
    gray.to_bitmap().save(&path).unwrap();

    let bitmap = Bitmap::open(&path).unwrap();
    assert!(bitmap.get(0, 0));
    assert!(!bitmap.get(1, 0));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Bitmap::open(temp_path("does-not-exist.pbm")).unwrap_err();

    match err {
        PnmErrors::IoErrors(err) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        err => panic!("Expected an io error, found {err:?}")
    }
}
