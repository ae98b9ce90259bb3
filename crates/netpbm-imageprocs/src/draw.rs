/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rasterise simple vector primitives onto a row-major canvas
//!
//! Every routine clips, points outside the canvas are silently dropped,
//! so callers may pass negative or oversized coordinates.
use netpbm_core::pixel::Point;

/// Iterator over the points of a digital differential analyzer line
///
/// The line takes `steps = max(|dx|, |dy|)` steps and visits
/// `p1 + i * (dx, dy) / steps` for `i` in `0..=steps`, each coordinate
/// rounded to the nearest integer (halves away from zero).
/// This differs from truncating the coordinates, `(0, 0) -> (4, 2)`
/// visits rows `0 1 1 2 2` where truncation gives `0 0 1 1 2`.
///
/// Both endpoints are always visited, a degenerate line where
/// `p1 == p2` yields exactly one point.
#[derive(Clone, Debug)]
pub struct LinePoints {
    start: Point,
    dx:    i128,
    dy:    i128,
    steps: i128,
    index: i128
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.steps {
            return None;
        }
        let point = if self.steps == 0 {
            self.start
        } else {
            let x = div_round(self.index * self.dx, self.steps);
            let y = div_round(self.index * self.dy, self.steps);

            Point::new(self.start.x + x as isize, self.start.y + y as isize)
        };
        self.index += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.steps + 1 - self.index).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

/// Divide rounding to the nearest integer, `denominator` must be positive
fn div_round(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;

    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        -((-numerator + half) / denominator)
    }
}

/// Return an iterator over the points of the line from `p1` to `p2`
pub fn line_points(p1: Point, p2: Point) -> LinePoints {
    let dx = p2.x as i128 - p1.x as i128;
    let dy = p2.y as i128 - p1.y as i128;

    LinePoints {
        start: p1,
        dx,
        dy,
        steps: dx.abs().max(dy.abs()),
        index: 0
    }
}

/// Write `value` at `point` if it lies inside the canvas, return whether it did
///
/// The canvas height is `canvas.len() / width`.
pub fn put_pixel_clipped<T: Copy>(canvas: &mut [T], width: usize, point: Point, value: T) -> bool {
    if width == 0 {
        return false;
    }
    let height = canvas.len() / width;

    match (usize::try_from(point.x), usize::try_from(point.y)) {
        (Ok(x), Ok(y)) if x < width && y < height => {
            canvas[y * width + x] = value;
            true
        }
        _ => false
    }
}

/// Draw a line from `p1` to `p2`, both inclusive
pub fn draw_line<T: Copy>(canvas: &mut [T], width: usize, p1: Point, p2: Point, value: T) {
    for point in line_points(p1, p2) {
        put_pixel_clipped(canvas, width, point, value);
    }
}

/// Draw the outline of a rectangle
///
/// The corners are `origin`, `origin + (w, 0)`, `origin + (w, h)` and
/// `origin + (0, h)`, so the outline covers `w + 1` columns and `h + 1` rows.
pub fn draw_rectangle<T: Copy>(
    canvas: &mut [T], width: usize, origin: Point, rect_width: isize, rect_height: isize, value: T
) {
    let right = origin.x.saturating_add(rect_width);
    let bottom = origin.y.saturating_add(rect_height);

    let top_right = Point::new(right, origin.y);
    let bottom_right = Point::new(right, bottom);
    let bottom_left = Point::new(origin.x, bottom);

    draw_line(canvas, width, origin, top_right, value);
    draw_line(canvas, width, top_right, bottom_right, value);
    draw_line(canvas, width, bottom_right, bottom_left, value);
    draw_line(canvas, width, bottom_left, origin, value);
}

/// Fill the pixels strictly inside a rectangle outline drawn by [`draw_rectangle`]
///
/// Columns `origin.x + 1 .. origin.x + w` and rows `origin.y + 1 .. origin.y + h`
/// are written, clipped to the canvas.
pub fn fill_rectangle_interior<T: Copy>(
    canvas: &mut [T], width: usize, origin: Point, rect_width: isize, rect_height: isize, value: T
) {
    if width == 0 {
        return;
    }
    let height = canvas.len() / width;

    let clip = |start: isize, end: isize, limit: usize| -> (usize, usize) {
        let start = usize::try_from(start.max(0)).unwrap_or(0).min(limit);
        let end = usize::try_from(end.max(0)).unwrap_or(0).min(limit);
        (start, end.max(start))
    };
    let (x_start, x_end) = clip(
        origin.x.saturating_add(1),
        origin.x.saturating_add(rect_width),
        width
    );
    let (y_start, y_end) = clip(
        origin.y.saturating_add(1),
        origin.y.saturating_add(rect_height),
        height
    );

    for row in canvas.chunks_exact_mut(width).take(y_end).skip(y_start) {
        row[x_start..x_end].fill(value);
    }
}

/// Fill a rectangle, outline and interior
pub fn draw_filled_rectangle<T: Copy>(
    canvas: &mut [T], width: usize, origin: Point, rect_width: isize, rect_height: isize, value: T
) {
    draw_rectangle(canvas, width, origin, rect_width, rect_height, value);
    fill_rectangle_interior(canvas, width, origin, rect_width, rect_height, value);
}

/// Draw the outline of the triangle `p1`, `p2`, `p3`
pub fn draw_triangle<T: Copy>(canvas: &mut [T], width: usize, p1: Point, p2: Point, p3: Point, value: T) {
    draw_line(canvas, width, p1, p2, value);
    draw_line(canvas, width, p2, p3, value);
    draw_line(canvas, width, p3, p1, value);
}
