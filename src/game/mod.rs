// Game module - game rules and the phase state machine
//
// This module contains:
// - round.rs: a single word-guessing round
// - session.rs: score across rounds
// - pagination.rs: paging over the category list
// - controller.rs: the phase state machine driving everything above
//
// Nothing in here touches the window, so it can be tested headless.

pub mod controller;
pub mod pagination;
pub mod round;
pub mod session;

// Re-export types for convenience
pub use controller::{Game, Phase};
pub use pagination::Pagination;
pub use round::{GuessOutcome, LetterState, Round};
pub use session::Session;
