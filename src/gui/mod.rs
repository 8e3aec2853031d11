//! Screen-Space GUI
//!
//! Everything the player sees, drawn procedurally with SDL2 primitives and
//! the bitmap font in [`crate::text`].
//!
//! # Architecture
//!
//! - Controls are immutable [`Button`] records; [`layout`] builds them per phase
//! - Hover and enabled state are derived at draw/click time, never stored
//! - [`screens`] holds one draw routine per phase
//! - [`figure`] turns a wrong-guess count into drawing primitives
//!
//! # Example Usage
//!
//! ```ignore
//! let buttons = layout::menu_buttons();
//! if let Some(button) = hit_test(&buttons, x, y) {
//!     game.activate(button.action());
//! }
//! screens::render_frame(&mut presentation, &game, &ScreenStyle::default())?;
//! ```

pub mod button;
pub mod figure;
pub mod layout;
pub mod palette;
pub mod screens;

pub use button::{Button, ButtonAction, ButtonStyle, hit_test};
pub use screens::{ScreenStyle, render_frame};
