//! AWS Cloud Services Hangman
//!
//! A single-player word-guessing game. The player picks a category of cloud
//! service names, then guesses the hidden service one letter at a time
//! before the hanged figure is complete.
//!
//! Game rules ([`game`], [`catalog`]) are plain data and run without a
//! window. Drawing lives in [`gui`] and goes through an explicit
//! [`presentation::Presentation`] context.

pub mod audio;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game;
pub mod gui;
pub mod input;
pub mod presentation;
pub mod text;

pub use catalog::{Catalog, Category};
pub use config::GameConfig;
pub use error::{CatalogError, GameError};
pub use game::{Game, GuessOutcome, Phase, Round, Session};
