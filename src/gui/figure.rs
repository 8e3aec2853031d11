//! Hanged Figure
//!
//! The figure is a fixed sequence of drawing steps. The base is always drawn;
//! each wrong guess from 1 to 6 unlocks one more step:
//!
//! | wrong | step          |
//! |-------|---------------|
//! | 1     | pole          |
//! | 2     | beam          |
//! | 3     | rope          |
//! | 4     | head          |
//! | 5     | torso + arms  |
//! | 6     | legs          |
//!
//! [`figure_shapes`] is a pure function of the wrong-guess count, so it can be
//! tested without a canvas.

use crate::config::MAX_WRONG_GUESSES;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A drawing primitive of the figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Line { from: (i32, i32), to: (i32, i32), thickness: u8 },
    Circle { center: (i32, i32), radius: i32, thickness: u8 },
}

/// Base, always visible
const BASE: &[Shape] = &[Shape::Line { from: (150, 350), to: (250, 350), thickness: 5 }];

/// Steps unlocked by wrong guesses 1..=6
const STEPS: [&[Shape]; MAX_WRONG_GUESSES as usize] = [
    // Pole
    &[Shape::Line { from: (200, 350), to: (200, 100), thickness: 5 }],
    // Beam
    &[Shape::Line { from: (200, 100), to: (300, 100), thickness: 5 }],
    // Rope
    &[Shape::Line { from: (300, 100), to: (300, 150), thickness: 5 }],
    // Head
    &[Shape::Circle { center: (300, 170), radius: 20, thickness: 3 }],
    // Torso and arms
    &[
        Shape::Line { from: (300, 190), to: (300, 250), thickness: 3 },
        Shape::Line { from: (300, 210), to: (270, 230), thickness: 3 },
        Shape::Line { from: (300, 210), to: (330, 230), thickness: 3 },
    ],
    // Legs
    &[
        Shape::Line { from: (300, 250), to: (270, 300), thickness: 3 },
        Shape::Line { from: (300, 250), to: (330, 300), thickness: 3 },
    ],
];

/// Number of unlocked steps for a wrong-guess count (never more than six)
pub fn steps_unlocked(wrong_count: u8) -> usize {
    (wrong_count as usize).min(STEPS.len())
}

/// Every shape to draw for `wrong_count`, base first
pub fn figure_shapes(wrong_count: u8) -> Vec<Shape> {
    BASE.iter()
        .chain(STEPS[..steps_unlocked(wrong_count)].iter().flat_map(|step| step.iter()))
        .copied()
        .collect()
}

/// Draws the figure for `wrong_count`
pub fn draw_figure(
    canvas: &mut Canvas<Window>,
    wrong_count: u8,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    for shape in figure_shapes(wrong_count) {
        match shape {
            Shape::Line { from, to, thickness } => draw_thick_line(canvas, from, to, thickness)?,
            Shape::Circle { center, radius, thickness } => {
                draw_ring(canvas, center, radius, thickness)?
            }
        }
    }
    Ok(())
}

/// Line widened by drawing parallel copies across its minor axis
fn draw_thick_line(
    canvas: &mut Canvas<Window>,
    from: (i32, i32),
    to: (i32, i32),
    thickness: u8,
) -> Result<(), String> {
    let steep = (to.1 - from.1).abs() > (to.0 - from.0).abs();
    let half = thickness as i32 / 2;

    for offset in -half..=(thickness as i32 - 1 - half) {
        let (dx, dy) = if steep { (offset, 0) } else { (0, offset) };
        canvas.draw_line(
            Point::new(from.0 + dx, from.1 + dy),
            Point::new(to.0 + dx, to.1 + dy),
        )?;
    }
    Ok(())
}

/// Circle outline `thickness` pixels wide, growing inward from `radius`
fn draw_ring(
    canvas: &mut Canvas<Window>,
    center: (i32, i32),
    radius: i32,
    thickness: u8,
) -> Result<(), String> {
    let points = ring_points(center, radius, thickness);
    canvas.draw_points(points.as_slice())
}

/// Midpoint-circle points for each radius in the ring
fn ring_points(center: (i32, i32), radius: i32, thickness: u8) -> Vec<Point> {
    let mut points = Vec::new();

    for r in (radius - thickness as i32 + 1).max(1)..=radius {
        let (mut x, mut y) = (r, 0);
        let mut err = 1 - r;

        while x >= y {
            let octants = [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ];
            for (px, py) in octants {
                points.push(Point::new(center.0 + px, center.1 + py));
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    points
}
