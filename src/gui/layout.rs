//! Control layout per screen
//!
//! Pure functions building the button list for each phase. The controller
//! calls these on every phase change and whenever the category page changes.

use super::button::{Button, ButtonAction, ButtonStyle};
use super::palette::*;
use crate::catalog::Catalog;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Pagination;
use sdl2::rect::Rect;

const LETTER_ROWS: [&str; 4] = ["ABCDEFGHIJ", "KLMNOPQRST", "UVWXYZ", "0123456789"];
const LETTER_SIZE: u32 = 40;
const LETTER_SPACING: i32 = 50;
const LETTER_LEFT: i32 = 150;
const LETTER_TOP: i32 = 400;

const CATEGORY_WIDTH: u32 = 350;
const CATEGORY_HEIGHT: u32 = 60;
const CATEGORY_STRIDE: i32 = 80;

fn centered(center_x: i32, center_y: i32, width: u32, height: u32) -> Rect {
    Rect::from_center((center_x, center_y), width, height)
}

fn green_style() -> ButtonStyle {
    ButtonStyle {
        idle_color: GREEN,
        hover_color: LIGHT_GREEN,
        ..Default::default()
    }
}

fn nav_style() -> ButtonStyle {
    ButtonStyle {
        idle_color: AWS_ORANGE,
        hover_color: AWS_BLUE_HOVER,
        text_color: BLACK,
        text_scale: 2,
        ..Default::default()
    }
}

/// Main menu: a single Play control
pub fn menu_buttons() -> Vec<Button> {
    vec![Button::new(
        Rect::new(300, 250, 200, 60),
        "PLAY GAME",
        ButtonAction::Play,
        green_style(),
    )]
}

/// Category controls for the current page, plus whichever of
/// Previous/Next is available
pub fn category_buttons(catalog: &Catalog, pages: &Pagination) -> Vec<Button> {
    let visible = pages.visible();
    let total_height = visible.len() as i32 * CATEGORY_STRIDE;
    let start_y = (SCREEN_HEIGHT as i32 - total_height) / 2;

    let style = ButtonStyle {
        idle_color: AWS_BLUE,
        hover_color: AWS_BLUE_HOVER,
        text_color: WHITE,
        ..Default::default()
    };

    let mut buttons: Vec<Button> = visible
        .enumerate()
        .map(|(slot, index)| {
            let category = &catalog.categories()[index];
            let bounds = Rect::new(
                (SCREEN_WIDTH - CATEGORY_WIDTH) as i32 / 2,
                start_y + slot as i32 * CATEGORY_STRIDE,
                CATEGORY_WIDTH,
                CATEGORY_HEIGHT,
            );
            Button::new(
                bounds,
                category.name(),
                ButtonAction::SelectCategory(index),
                style,
            )
        })
        .collect();

    if pages.has_previous() {
        buttons.push(Button::new(
            Rect::new(200, 500, 100, 40),
            "PREVIOUS",
            ButtonAction::PreviousPage,
            nav_style(),
        ));
    }
    if pages.has_next() {
        buttons.push(Button::new(
            Rect::new(500, 500, 100, 40),
            "NEXT",
            ButtonAction::NextPage,
            nav_style(),
        ));
    }

    buttons
}

/// On-screen keyboard: A-Z in three rows, digits in a fourth
pub fn letter_buttons() -> Vec<Button> {
    let style = ButtonStyle {
        idle_color: GRAY,
        hover_color: LIGHT_GRAY,
        text_scale: 2,
        ..Default::default()
    };

    let mut buttons = Vec::with_capacity(36);
    for (row, letters) in LETTER_ROWS.iter().enumerate() {
        // The short U-Z row is indented
        let indent = if letters.len() < 10 { 100 } else { 0 };
        let y = LETTER_TOP + row as i32 * LETTER_SPACING;

        for (i, letter) in letters.chars().enumerate() {
            let x = LETTER_LEFT + indent + i as i32 * LETTER_SPACING;
            buttons.push(Button::new(
                Rect::new(x, y, LETTER_SIZE, LETTER_SIZE),
                letter.to_string(),
                ButtonAction::Guess(letter),
                style,
            ));
        }
    }

    buttons
}

/// Result screen: Play Again and Main Menu
pub fn game_over_buttons() -> Vec<Button> {
    let center_x = SCREEN_WIDTH as i32 / 2;
    vec![
        Button::new(
            centered(center_x, 350, 200, 60),
            "PLAY AGAIN",
            ButtonAction::PlayAgain,
            green_style(),
        ),
        Button::new(
            centered(center_x, 450, 200, 60),
            "MAIN MENU",
            ButtonAction::MainMenu,
            ButtonStyle {
                idle_color: WHITE,
                hover_color: SLATE,
                ..Default::default()
            },
        ),
    ]
}
