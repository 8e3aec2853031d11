//! Clickable Button Control
//!
//! Buttons are immutable value records: geometry, label, style and the action
//! they stand for. Hover is not stored; it is derived from the pointer position
//! when drawing. Clicks are resolved with [`hit_test`].

use crate::text::draw_text_in_rect;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Play,
    /// Index into the catalog's category list
    SelectCategory(usize),
    PreviousPage,
    NextPage,
    Guess(char),
    PlayAgain,
    MainMenu,
}

/// Colors and text size for a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub idle_color: Color,
    pub hover_color: Color,
    pub text_color: Color,
    pub border_color: Color,
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            idle_color: Color::RGB(200, 200, 200),
            hover_color: Color::RGB(220, 220, 220),
            text_color: Color::RGB(0, 0, 0),
            border_color: Color::RGB(0, 0, 0),
            text_scale: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    bounds: Rect,
    label: String,
    action: ButtonAction,
    style: ButtonStyle,
}

impl Button {
    pub fn new(
        bounds: Rect,
        label: impl Into<String>,
        action: ButtonAction,
        style: ButtonStyle,
    ) -> Self {
        Button {
            bounds,
            label: label.into(),
            action,
            style,
        }
    }

    /// Same button with a different label; geometry is unchanged
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            ..self.clone()
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> ButtonAction {
        self.action
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds.contains_point(Point::new(x, y))
    }

    pub fn is_hovered(&self, pointer: (i32, i32)) -> bool {
        self.contains(pointer.0, pointer.1)
    }

    /// Fill color for the current pointer position
    pub fn fill_color(&self, pointer: (i32, i32)) -> Color {
        if self.is_hovered(pointer) {
            self.style.hover_color
        } else {
            self.style.idle_color
        }
    }

    /// Draws the button with an explicit fill color
    pub fn draw(&self, canvas: &mut Canvas<Window>, fill: Color) -> Result<(), String> {
        canvas.set_draw_color(fill);
        canvas.fill_rect(self.bounds)?;

        // Two-pixel border
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(self.bounds)?;
        if self.bounds.width() > 2 && self.bounds.height() > 2 {
            canvas.draw_rect(Rect::new(
                self.bounds.x() + 1,
                self.bounds.y() + 1,
                self.bounds.width() - 2,
                self.bounds.height() - 2,
            ))?;
        }

        draw_text_in_rect(
            canvas,
            &self.label,
            self.bounds,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}

/// Returns the first button under (`x`, `y`)
pub fn hit_test(buttons: &[Button], x: i32, y: i32) -> Option<&Button> {
    buttons.iter().find(|b| b.contains(x, y))
}
