//! Presentation Context
//!
//! Owns the window canvas and the optional background texture. Render
//! routines receive it explicitly instead of reaching for globals.

use crate::error::GameError;
use crate::gui::palette::{OVERLAY, WHITE};
use sdl2::image::LoadTexture;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;

pub struct Presentation<'t> {
    pub canvas: Canvas<Window>,
    background: Option<Texture<'t>>,
}

impl<'t> Presentation<'t> {
    pub fn new(canvas: Canvas<Window>, background: Option<Texture<'t>>) -> Self {
        Presentation { canvas, background }
    }

    /// Background image under a translucent white overlay, or plain white
    pub fn clear_background(&mut self) -> Result<(), String> {
        match &self.background {
            Some(texture) => {
                // Stretched over the whole logical screen
                self.canvas.copy(texture, None, None)?;
                self.canvas.set_blend_mode(BlendMode::Blend);
                self.canvas.set_draw_color(OVERLAY);
                self.canvas.fill_rect(None)?;
                self.canvas.set_blend_mode(BlendMode::None);
            }
            None => {
                self.canvas.set_draw_color(WHITE);
                self.canvas.clear();
            }
        }
        Ok(())
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}

/// Loads the background image, or `None` (with a warning) if it is unavailable
pub fn load_background<'t>(
    creator: &'t TextureCreator<WindowContext>,
    path: &Path,
) -> Option<Texture<'t>> {
    match try_load_background(creator, path) {
        Ok(texture) => {
            log::info!("Background image loaded from {}", path.display());
            Some(texture)
        }
        Err(e) => {
            log::warn!("{}; using plain background", e);
            None
        }
    }
}

fn try_load_background<'t>(
    creator: &'t TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'t>, GameError> {
    if !path.exists() {
        return Err(GameError::Asset {
            path: path.display().to_string(),
            reason: "file not found".to_string(),
        });
    }

    creator.load_texture(path).map_err(|reason| GameError::Asset {
        path: path.display().to_string(),
        reason,
    })
}
