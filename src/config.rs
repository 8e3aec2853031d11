//! Game-wide tunables.
//!
//! Nothing here is read from disk or the environment: the game has no config
//! file. Everything a build might want to tweak lives in [`GameConfig`].

use std::path::PathBuf;

/// Logical screen width in pixels
pub const SCREEN_WIDTH: u32 = 800;

/// Logical screen height in pixels
pub const SCREEN_HEIGHT: u32 = 600;

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Runtime configuration for a game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window title
    pub title: String,

    /// Frames per second for the main loop
    pub tick_rate: u32,

    /// Number of category controls shown on one page
    pub categories_per_page: usize,

    /// Optional word data (JSON)
    pub categories_path: PathBuf,

    /// Optional background image
    pub background_path: PathBuf,

    /// Directory holding the optional sound clips
    pub sounds_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "AWS Cloud Services Hangman Game".to_string(),
            tick_rate: 60,
            categories_per_page: 3,
            categories_path: PathBuf::from("assets/categories.json"),
            background_path: PathBuf::from("images/aws_bg.jpg"),
            sounds_dir: PathBuf::from("sounds"),
        }
    }
}

impl GameConfig {
    /// Time budget for a single frame
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::new(0, 1_000_000_000u32 / self.tick_rate.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.categories_per_page, 3);
        assert_eq!(config.categories_path, PathBuf::from("assets/categories.json"));
        assert_eq!(config.background_path, PathBuf::from("images/aws_bg.jpg"));
    }

    #[test]
    fn test_frame_duration() {
        let config = GameConfig {
            tick_rate: 50,
            ..Default::default()
        };
        assert_eq!(config.frame_duration().as_millis(), 20);
    }
}
