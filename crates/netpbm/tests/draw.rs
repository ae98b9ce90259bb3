/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm::{Pixel, Pixmap, Point};

const RED: Pixel = Pixel::new(255, 0, 0);
const BLACK: Pixel = Pixel::new(0, 0, 0);

fn painted(image: &Pixmap) -> Vec<(usize, usize)> {
    let (width, height) = image.dimensions();
    let mut points = vec![];

    for y in 0..height {
        for x in 0..width {
            if image.get(x, y) != Some(BLACK) {
                points.push((x, y));
            }
        }
    }
    points
}

#[test]
fn degenerate_line_sets_one_pixel() {
    let mut image = Pixmap::new(5, 5, 255);
    image.draw_line(Point::new(0, 0), Point::new(0, 0), RED);

    assert_eq!(painted(&image), [(0, 0)]);
}

#[test]
fn horizontal_and_vertical_lines() {
    let mut image = Pixmap::new(4, 4, 255);
    image.draw_line(Point::new(3, 1), Point::new(0, 1), RED);
    image.draw_line(Point::new(2, 3), Point::new(2, 2), RED);

    assert_eq!(painted(&image), [(0, 1), (1, 1), (2, 1), (3, 1), (2, 2), (2, 3)]);
}

#[test]
fn clipped_line() {
    let mut image = Pixmap::new(3, 3, 255);
    image.draw_line(Point::new(-3, -3), Point::new(5, 5), RED);

    assert_eq!(painted(&image), [(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn filled_rectangle_leaves_outside_untouched() {
    let mut image = Pixmap::new(10, 10, 255);
    image.draw_filled_rectangle(Point::new(1, 1), 3, 3, RED);

    for y in 1..=4 {
        for x in 1..=4 {
            assert_eq!(image.get(x, y), Some(RED), "({x},{y})");
        }
    }
    assert_eq!(painted(&image).len(), 16);
    assert_eq!(image.get(5, 5), Some(BLACK));
    assert_eq!(image.get(0, 0), Some(BLACK));
}

#[test]
fn rectangle_outline_only() {
    let mut image = Pixmap::new(6, 6, 255);
    image.draw_rectangle(Point::new(1, 1), 3, 3, RED);

    assert_eq!(painted(&image).len(), 12);
    assert_eq!(image.get(2, 2), Some(BLACK));
    assert_eq!(image.get(4, 4), Some(RED));
}

#[test]
fn triangle_outline() {
    let mut image = Pixmap::new(5, 5, 255);
    image.draw_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), RED);

    // three corners and the hypotenuse, inside stays black
    assert_eq!(image.get(4, 0), Some(RED));
    assert_eq!(image.get(0, 4), Some(RED));
    assert_eq!(image.get(2, 2), Some(RED));
    assert_eq!(image.get(1, 1), Some(BLACK));
    assert_eq!(painted(&image).len(), 12);
}

#[test]
fn colors_are_clamped_to_max() {
    let mut image = Pixmap::new(1, 1, 100);
    image.draw_line(Point::new(0, 0), Point::new(0, 0), Pixel::new(255, 50, 101));

    assert_eq!(image.get(0, 0), Some(Pixel::new(100, 50, 100)));
}

#[test]
fn rectangle_at_the_edge_of_isize() {
    let mut image = Pixmap::new(4, 4, 255);

    image.draw_rectangle(Point::new(isize::MAX - 1, 0), 5, 5, RED);
    image.draw_filled_rectangle(Point::new(0, isize::MAX - 1), 5, 5, RED);

    assert!(painted(&image).is_empty());
}
