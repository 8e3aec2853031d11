//! Error types for the game
//!
//! Only two things can actually go wrong: SDL2 refusing to start, and the
//! optional word data being unreadable. The latter never escapes
//! [`crate::catalog::Catalog::load`]; it is logged and replaced by the built-in
//! table.

use thiserror::Error;

/// Problems found while reading or validating category data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read category data: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse category data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("category data contains no categories")]
    Empty,

    #[error("category '{0}' has no name or no words")]
    EmptyCategory(String),

    #[error("category '{category}' contains invalid word '{word}'")]
    InvalidWord { category: String, word: String },

    #[error("category '{0}' is listed more than once")]
    DuplicateCategory(String),
}

/// Top-level error returned from startup
#[derive(Debug, Error)]
pub enum GameError {
    /// SDL2 reports its failures as plain strings
    #[error("SDL2 error: {0}")]
    Sdl(String),

    #[error("could not load asset '{path}': {reason}")]
    Asset { path: String, reason: String },
}

impl From<String> for GameError {
    fn from(error: String) -> Self {
        GameError::Sdl(error)
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdl_string_conversion() {
        let error: GameError = "No available video device".to_string().into();
        assert_eq!(error.to_string(), "SDL2 error: No available video device");
    }

    #[test]
    fn test_invalid_word_message() {
        let error = CatalogError::InvalidWord {
            category: "AWS Compute".to_string(),
            word: "EC-2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "category 'AWS Compute' contains invalid word 'EC-2'"
        );
    }
}
