/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm::{Bitmap, DecoderOptions, Graymap, Pixmap, PnmDecoder, PnmErrors, PnmImage};

#[test]
fn empty_stream() {
    let err = PnmImage::decode(b"").unwrap_err();

    assert!(matches!(err, PnmErrors::Format(_)));
}

#[test]
fn unknown_magic() {
    for data in [&b"P7\n1 1\n"[..], b"Q1\n1 1\n0", b"P0 1 1 0"] {
        let err = PnmImage::decode(data).unwrap_err();
        assert!(matches!(err, PnmErrors::Format(_)), "{data:?}");
    }
}

#[test]
fn magic_must_end_at_whitespace() {
    let cases = [
        &b"P12 2\n1 0\n0 1\n"[..],
        b"P1x\n2 2\n1 0\n0 1\n",
        b"P255 1 3 0 1 2",
        b"P6255\n1 1\n255\n\x00\x00\x00"
    ];
    for data in cases {
        let err = PnmImage::decode(data).unwrap_err();
        assert!(matches!(err, PnmErrors::Format(_)), "{data:?}");
    }
    assert!(matches!(
        Bitmap::decode(b"P12 2\n1 0\n0 1\n"),
        Err(PnmErrors::Format(_))
    ));
    assert!(matches!(
        Graymap::decode(b"P255 1 3 0 1 2"),
        Err(PnmErrors::Format(_))
    ));
}

#[test]
fn comment_right_after_magic() {
    let image = Bitmap::decode(b"P1# made by hand\n2 1\n1 0\n").unwrap();
    assert_eq!(image.dimensions(), (2, 1));
}

#[test]
fn wrong_kind_for_type() {
    assert!(matches!(
        Bitmap::decode(b"P2 1 1 255 0"),
        Err(PnmErrors::Format(_))
    ));
    assert!(matches!(
        Graymap::decode(b"P6 1 1 255\n\x00\x00\x00"),
        Err(PnmErrors::Format(_))
    ));
    assert!(matches!(Pixmap::decode(b"P1 1 1 0"), Err(PnmErrors::Format(_))));
}

#[test]
fn unparsable_dimensions() {
    for data in [
        &b"P1\nx 2\n"[..],
        b"P1\n2\n",
        b"P1\n2 -1\n",
        b"P2 2 2\n",
        b"P2 2 2 abc\n",
        b"P3 99999999999999999999999999 1 255\n"
    ] {
        let err = PnmImage::decode(data).unwrap_err();
        assert!(matches!(err, PnmErrors::Dimension(_)), "{data:?}");
    }
}

#[test]
fn sixteen_bit_max_value() {
    let err = Graymap::decode(b"P5 1 1 65535\n\x00\x00").unwrap_err();

    assert!(matches!(err, PnmErrors::Dimension(_)));
}

#[test]
fn too_large_dimensions() {
    let options = DecoderOptions::default().set_max_width(4).set_max_height(2);

    let err = Graymap::decode_with_options(b"P5 5 1 255\n", options).unwrap_err();
    assert!(matches!(err, PnmErrors::TooLargeDimensions("width", 4, 5)));

    let err = Graymap::decode_with_options(b"P5 4 3 255\n", options).unwrap_err();
    assert!(matches!(err, PnmErrors::TooLargeDimensions("height", 2, 3)));
}

#[test]
fn truncated_ascii_raster() {
    let err = Graymap::decode(b"P2 2 2 255 1 2 3").unwrap_err();

    assert!(matches!(err, PnmErrors::TruncatedData(4, 3)));
}

#[test]
fn truncated_bitmap_rows() {
    let err = Bitmap::decode(b"P1\n2 2\n1 0\n").unwrap_err();
    assert!(matches!(err, PnmErrors::TruncatedData(4, 2)));

    // 9 pixels per row need two bytes each
    let err = Bitmap::decode(b"P4\n9 2\n\x00\x00\x00").unwrap_err();
    assert!(matches!(err, PnmErrors::TruncatedData(4, 3)));
}

#[test]
fn truncated_binary_raster() {
    let err = Pixmap::decode(b"P6 2 1 255\n\x00\x00\x00\x00").unwrap_err();

    assert!(matches!(err, PnmErrors::TruncatedData(6, 4)));
}

#[test]
fn missing_raster_separator() {
    let err = Graymap::decode(b"P5 1 1 255").unwrap_err();
    // no separator and no raster
    assert!(matches!(err, PnmErrors::TruncatedData(1, 0)));

    let err = Graymap::decode(b"P5 1 1 255#\n\x00").unwrap_err();
    assert!(matches!(err, PnmErrors::Format(_)));
}

#[test]
fn strict_bitmap_pixel() {
    let image = Bitmap::decode(b"P1 2 1 0 7").unwrap();
    assert!(image.get(1, 0));

    let err = Bitmap::decode_with_options(b"P1 2 1 0 7", DecoderOptions::new_strict()).unwrap_err();
    assert!(matches!(err, PnmErrors::ValueOutOfRange(7, 1)));
}

#[test]
fn decoder_reports_headers_after_failure() {
    let mut decoder = PnmDecoder::new(b"P2 3 1 9 1 2");

    assert!(decoder.decode().is_err());
    assert_eq!(decoder.dimensions(), Some((3, 1)));
    assert_eq!(decoder.max_value(), Some(9));
}
