use std::f64::consts::PI;

use druid::Color;

use crate::geometry::Point2;

/// Writes one pixel into the RGBA buffer, ignoring out-of-bounds positions.
fn set_pixel(x: isize, y: isize, pixel_data: &mut [u8], width: usize, height: usize, color: &Color) {
    if x < 0 || x >= width as isize || y < 0 || y >= height as isize {
        return;
    }
    let offset = (y as usize * width + x as usize) * 4;
    let (r, g, b, a) = color.as_rgba8();
    pixel_data[offset] = r;
    pixel_data[offset + 1] = g;
    pixel_data[offset + 2] = b;
    pixel_data[offset + 3] = a;
}

/// Plots a point as a thickness×thickness square centred on it.
pub fn plot_point(
    p: Point2,
    thickness: f64,
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    color: Color,
) {
    let half = thickness / 2.0;
    let min_x = (p[0] - half).round() as isize;
    let max_x = (p[0] + half).round() as isize;
    let min_y = (p[1] - half).round() as isize;
    let max_y = (p[1] + half).round() as isize;
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            set_pixel(x, y, pixel_data, width, height, &color);
        }
    }
}

/// Draws a line between two points in the pixel buffer using Bresenham's
/// algorithm.
pub fn draw_line(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    color: Color,
) {
    let (mut x0, mut y0, x1, y1) = (
        x0.round() as isize,
        y0.round() as isize,
        x1.round() as isize,
        y1.round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy

    loop {
        set_pixel(x0, y0, pixel_data, width, height, &color);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a circle outline of the given stroke thickness by stamping points
/// along the circumference, one per pixel of arc length.
pub fn draw_circle_outline(
    center: Point2,
    radius: f64,
    thickness: f64,
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    color: Color,
) {
    let steps = (2.0 * PI * radius).ceil().max(8.0) as usize;
    for i in 0..steps {
        let angle = 2.0 * PI * i as f64 / steps as f64;
        let (sin_val, cos_val) = angle.sin_cos();
        let p = [center[0] + radius * cos_val, center[1] + radius * sin_val];
        plot_point(p, thickness, pixel_data, width, height, color.clone());
    }
}

/// Fills the whole buffer with one colour.
pub fn clear(pixel_data: &mut [u8], color: Color) {
    let (r, g, b, a) = color.as_rgba8();
    for pixel in pixel_data.chunks_exact_mut(4) {
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
        pixel[3] = a;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_at(buf: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * width + x) * 4;
        [buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]]
    }

    #[test]
    fn plot_point_fills_a_square() {
        let (w, h) = (16, 16);
        let mut buf = vec![0u8; w * h * 4];
        plot_point([8.0, 8.0], 2.0, &mut buf, w, h, Color::rgb8(0, 0, 255));
        assert_eq!(pixel_at(&buf, w, 8, 8), [0, 0, 255, 255]);
        assert_eq!(pixel_at(&buf, w, 7, 7), [0, 0, 255, 255]);
        assert_eq!(pixel_at(&buf, w, 9, 9), [0, 0, 255, 255]);
        assert_eq!(pixel_at(&buf, w, 12, 12), [0, 0, 0, 0]);
    }

    #[test]
    fn plot_point_clips_at_the_buffer_edge() {
        let (w, h) = (8, 8);
        let mut buf = vec![0u8; w * h * 4];
        plot_point([0.0, 0.0], 4.0, &mut buf, w, h, Color::WHITE);
        plot_point([-50.0, -50.0], 4.0, &mut buf, w, h, Color::WHITE);
        assert_eq!(pixel_at(&buf, w, 0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn draw_line_covers_both_endpoints() {
        let (w, h) = (32, 32);
        let mut buf = vec![0u8; w * h * 4];
        draw_line(2.0, 3.0, 20.0, 17.0, &mut buf, w, h, Color::rgb8(255, 0, 0));
        assert_eq!(pixel_at(&buf, w, 2, 3), [255, 0, 0, 255]);
        assert_eq!(pixel_at(&buf, w, 20, 17), [255, 0, 0, 255]);
    }

    #[test]
    fn circle_outline_touches_the_cardinal_points() {
        let (w, h) = (64, 64);
        let mut buf = vec![0u8; w * h * 4];
        draw_circle_outline([32.0, 32.0], 20.0, 1.0, &mut buf, w, h, Color::BLACK);
        for (x, y) in [(52, 32), (12, 32), (32, 52), (32, 12)] {
            assert_eq!(pixel_at(&buf, w, x, y), [0, 0, 0, 255]);
        }
        // The interior stays untouched.
        assert_eq!(pixel_at(&buf, w, 32, 32), [0, 0, 0, 0]);
    }
}
