//! Screen Renderer
//!
//! One draw routine per phase. Each reads the game state and paints it; none
//! of them mutate the game. [`render_frame`] clears the background, picks the
//! routine for the current phase and presents the frame.

use super::button::{Button, ButtonAction};
use super::figure::draw_figure;
use super::palette::*;
use crate::config::SCREEN_WIDTH;
use crate::game::{Game, LetterState, Phase};
use crate::presentation::Presentation;
use crate::text::{draw_centered_text, draw_simple_text, fit_scale, text_width};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Text colors shared by the screens
#[derive(Debug, Clone)]
pub struct ScreenStyle {
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub win_color: Color,
    pub lose_color: Color,
    pub figure_color: Color,
}

impl Default for ScreenStyle {
    fn default() -> Self {
        ScreenStyle {
            title_color: AWS_BLUE,
            accent_color: AWS_ORANGE,
            text_color: BLACK,
            win_color: GREEN,
            lose_color: RED,
            figure_color: BLACK,
        }
    }
}

/// Masked word area, right of the figure
const WORD_CENTER_X: i32 = 560;
const WORD_TOP: i32 = 210;
const WORD_MAX_WIDTH: u32 = 440;

/// Paints the whole frame for the current phase
pub fn render_frame(
    presentation: &mut Presentation,
    game: &Game,
    style: &ScreenStyle,
) -> Result<(), String> {
    presentation.clear_background()?;

    let canvas = &mut presentation.canvas;
    match game.phase() {
        Phase::Menu => draw_menu(canvas, game, style)?,
        Phase::CategorySelect => draw_category_select(canvas, game, style)?,
        Phase::Playing => draw_playing(canvas, game, style)?,
        Phase::GameOver => draw_game_over(canvas, game, style)?,
    }

    presentation.present();
    Ok(())
}

fn center_x() -> i32 {
    SCREEN_WIDTH as i32 / 2
}

fn draw_buttons(
    canvas: &mut Canvas<Window>,
    buttons: &[Button],
    pointer: (i32, i32),
) -> Result<(), String> {
    for button in buttons {
        button.draw(canvas, button.fill_color(pointer))?;
    }
    Ok(())
}

pub fn draw_menu(
    canvas: &mut Canvas<Window>,
    game: &Game,
    style: &ScreenStyle,
) -> Result<(), String> {
    draw_centered_text(canvas, "AWS CLOUD SERVICES", center_x(), 120, style.title_color, 5)?;
    draw_centered_text(canvas, "HANGMAN GAME", center_x(), 190, style.accent_color, 3)?;
    draw_buttons(canvas, game.buttons(), game.pointer())
}

pub fn draw_category_select(
    canvas: &mut Canvas<Window>,
    game: &Game,
    style: &ScreenStyle,
) -> Result<(), String> {
    draw_centered_text(
        canvas,
        "AWS CLOUD SERVICES HANGMAN",
        center_x(),
        40,
        style.accent_color,
        3,
    )?;
    draw_centered_text(canvas, "SELECT AN AWS CATEGORY", center_x(), 80, style.title_color, 3)?;

    // Previous/Next are only in the list when available
    draw_buttons(canvas, game.buttons(), game.pointer())?;

    draw_centered_text(canvas, &game.pages().indicator(), center_x(), 555, style.text_color, 2)
}

pub fn draw_playing(
    canvas: &mut Canvas<Window>,
    game: &Game,
    style: &ScreenStyle,
) -> Result<(), String> {
    let Some(round) = game.round() else {
        return Ok(());
    };

    let category = format!("CATEGORY: {}", round.category());
    draw_simple_text(canvas, &category, 20, 20, style.title_color, 2)?;

    let remaining = format!("GUESSES LEFT: {}", round.remaining_guesses());
    let remaining_x = SCREEN_WIDTH as i32 - text_width(&remaining, 2) as i32 - 20;
    draw_simple_text(canvas, &remaining, remaining_x, 20, style.text_color, 2)?;

    draw_centered_text(canvas, "AWS CLOUD SERVICES", center_x(), 50, style.accent_color, 2)?;

    draw_figure(canvas, round.wrong_count(), style.figure_color)?;

    let masked = round.masked_word();
    let scale = fit_scale(&masked, WORD_MAX_WIDTH, 4);
    draw_centered_text(canvas, &masked, WORD_CENTER_X, WORD_TOP, style.text_color, scale)?;

    // Used letters keep their verdict color and ignore hover
    for button in game.buttons() {
        let fill = match button.action() {
            ButtonAction::Guess(letter) => match round.letter_state(letter) {
                LetterState::Hit => GREEN,
                LetterState::Miss => RED,
                LetterState::Unused => button.fill_color(game.pointer()),
            },
            _ => button.fill_color(game.pointer()),
        };
        button.draw(canvas, fill)?;
    }

    Ok(())
}

pub fn draw_game_over(
    canvas: &mut Canvas<Window>,
    game: &Game,
    style: &ScreenStyle,
) -> Result<(), String> {
    draw_centered_text(canvas, "AWS CLOUD SERVICES", center_x(), 80, style.accent_color, 3)?;

    if let Some(round) = game.round() {
        if round.is_won() {
            draw_centered_text(canvas, "YOU WIN!", center_x(), 120, style.win_color, 6)?;
        } else {
            draw_centered_text(canvas, "GAME OVER", center_x(), 120, style.lose_color, 6)?;
        }

        let reveal = format!("THE SERVICE WAS: {}", round.word());
        let scale = fit_scale(&reveal, SCREEN_WIDTH - 40, 3);
        draw_centered_text(canvas, &reveal, center_x(), 200, style.title_color, scale)?;
    }

    draw_centered_text(canvas, &game.session().tally(), center_x(), 250, style.text_color, 3)?;
    draw_buttons(canvas, game.buttons(), game.pointer())
}
