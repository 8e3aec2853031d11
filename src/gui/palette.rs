//! Shared colors

use sdl2::pixels::Color;

pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const BLACK: Color = Color::RGB(0, 0, 0);
pub const GRAY: Color = Color::RGB(200, 200, 200);
pub const LIGHT_GRAY: Color = Color::RGB(220, 220, 220);
pub const GREEN: Color = Color::RGB(0, 200, 0);
pub const LIGHT_GREEN: Color = Color::RGB(100, 255, 100);
pub const RED: Color = Color::RGB(200, 0, 0);
pub const AWS_ORANGE: Color = Color::RGB(255, 153, 0);
pub const AWS_BLUE: Color = Color::RGB(35, 47, 62);
pub const AWS_BLUE_HOVER: Color = Color::RGB(45, 57, 72);
pub const SLATE: Color = Color::RGB(180, 190, 200);

/// Translucent white laid over the background image so text stays readable
pub const OVERLAY: Color = Color::RGBA(255, 255, 255, 180);
