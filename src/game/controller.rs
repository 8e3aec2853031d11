// Game controller
//
// Owns the phase state machine. Every input arrives as a UiAction; the
// controller resolves clicks against the controls of the current phase,
// mutates round/session state and returns the sound cues to play.
//
//   Menu ──Play──▶ CategorySelect ──category──▶ Playing ──won/lost──▶ GameOver
//    ▲              ▲   │ prev/next                 │ guess                │
//    │              │   └───────┘                   └──┘                   │
//    │              └────────────────── Play Again ───────────────────────┤
//    └───────────────────────────────── Main Menu ────────────────────────┘

use super::round::GuessOutcome;
use super::{Pagination, Round, Session};
use crate::audio::SoundCue;
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::gui::{Button, ButtonAction, hit_test, layout};
use crate::input::UiAction;
use rand::rngs::StdRng;

/// Screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    CategorySelect,
    Playing,
    GameOver,
}

pub struct Game {
    phase: Phase,
    catalog: Catalog,
    session: Session,
    pages: Pagination,
    round: Option<Round>,
    buttons: Vec<Button>,
    pointer: (i32, i32),
    rng: StdRng,
    quit_requested: bool,
}

impl Game {
    /// New game on the main menu
    pub fn new(catalog: Catalog, config: &GameConfig, rng: StdRng) -> Self {
        let pages = Pagination::new(catalog.len(), config.categories_per_page);
        Game {
            phase: Phase::Menu,
            catalog,
            session: Session::new(),
            pages,
            round: None,
            buttons: layout::menu_buttons(),
            pointer: (0, 0),
            rng,
            quit_requested: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pages(&self) -> &Pagination {
        &self.pages
    }

    /// Active round while playing, finished round on the result screen
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Controls of the current phase
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Whether a control currently reacts to clicks
    ///
    /// Letter controls are disabled once their letter has been guessed.
    pub fn is_enabled(&self, button: &Button) -> bool {
        match button.action() {
            ButtonAction::Guess(letter) => self
                .round
                .as_ref()
                .is_some_and(|round| !round.has_guessed(letter)),
            _ => true,
        }
    }

    /// Handles one input action; returns the sound cues it produced
    pub fn handle(&mut self, action: UiAction) -> Vec<SoundCue> {
        match action {
            UiAction::Quit => {
                self.quit_requested = true;
                Vec::new()
            }
            UiAction::PointerMoved(x, y) => {
                self.pointer = (x, y);
                Vec::new()
            }
            UiAction::Click(x, y) => {
                self.pointer = (x, y);
                self.click(x, y)
            }
            UiAction::Letter(letter) if self.phase == Phase::Playing => self.guess(letter),
            UiAction::Letter(_) => Vec::new(),
        }
    }

    fn click(&mut self, x: i32, y: i32) -> Vec<SoundCue> {
        let action = hit_test(&self.buttons, x, y)
            .filter(|b| self.is_enabled(b))
            .map(|b| b.action());

        match action {
            Some(action) => self.activate(action),
            None => Vec::new(),
        }
    }

    /// Applies a control's action if it belongs to the current phase
    pub fn activate(&mut self, action: ButtonAction) -> Vec<SoundCue> {
        match (self.phase, action) {
            (Phase::Menu, ButtonAction::Play) => {
                self.enter_category_select();
                Vec::new()
            }
            (Phase::CategorySelect, ButtonAction::SelectCategory(index)) => {
                self.start_round(index);
                Vec::new()
            }
            (Phase::CategorySelect, ButtonAction::PreviousPage) => {
                if self.pages.previous() {
                    self.buttons = layout::category_buttons(&self.catalog, &self.pages);
                }
                Vec::new()
            }
            (Phase::CategorySelect, ButtonAction::NextPage) => {
                if self.pages.next() {
                    self.buttons = layout::category_buttons(&self.catalog, &self.pages);
                }
                Vec::new()
            }
            (Phase::Playing, ButtonAction::Guess(letter)) => self.guess(letter),
            (Phase::GameOver, ButtonAction::PlayAgain) => {
                self.round = None;
                self.enter_category_select();
                Vec::new()
            }
            (Phase::GameOver, ButtonAction::MainMenu) => {
                self.round = None;
                self.set_phase(Phase::Menu);
                self.buttons = layout::menu_buttons();
                Vec::new()
            }
            (phase, action) => {
                log::debug!("Ignoring {:?} in {:?}", action, phase);
                Vec::new()
            }
        }
    }

    fn enter_category_select(&mut self) {
        self.set_phase(Phase::CategorySelect);
        self.buttons = layout::category_buttons(&self.catalog, &self.pages);
    }

    fn start_round(&mut self, index: usize) {
        let Some(category) = self.catalog.categories().get(index) else {
            log::warn!("No category at index {}", index);
            return;
        };

        let round = Round::start(category, &mut self.rng);
        log::debug!(
            "Round started in '{}' ({} letters)",
            round.category(),
            round.word().len()
        );

        self.round = Some(round);
        self.session.record_start();
        self.set_phase(Phase::Playing);
        self.buttons = layout::letter_buttons();
    }

    /// Guesses a letter in the active round; ends the round when it is decided
    fn guess(&mut self, letter: char) -> Vec<SoundCue> {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let mut cues = match round.guess(letter) {
            GuessOutcome::Invalid | GuessOutcome::AlreadyGuessed => return Vec::new(),
            GuessOutcome::Correct => vec![SoundCue::Correct],
            GuessOutcome::Incorrect => vec![SoundCue::Wrong],
        };
        log::debug!(
            "Guessed {} ({} wrong of {})",
            letter,
            round.wrong_count(),
            round.max_wrong()
        );

        let won = round.is_won();
        let lost = round.is_lost();
        debug_assert!(!(won && lost), "a round cannot be won and lost at once");

        if won {
            log::info!("Won: {}", round.word());
            self.session.record_win();
            cues.push(SoundCue::Win);
        } else if lost {
            log::info!("Lost: {}", round.word());
            cues.push(SoundCue::Lose);
        }

        if won || lost {
            self.set_phase(Phase::GameOver);
            self.buttons = layout::game_over_buttons();
        }

        cues
    }

    fn set_phase(&mut self, phase: Phase) {
        log::debug!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn new_game() -> Game {
        Game::new(Catalog::builtin(), &GameConfig::default(), StdRng::seed_from_u64(1))
    }

    fn click_action(game: &mut Game, action: ButtonAction) -> Vec<SoundCue> {
        let center = game
            .buttons()
            .iter()
            .find(|b| b.action() == action)
            .map(|b| b.bounds().center())
            .unwrap_or_else(|| panic!("no {:?} control in {:?}", action, game.phase()));
        game.handle(UiAction::Click(center.x(), center.y()))
    }

    #[test]
    fn test_starts_on_menu() {
        let game = new_game();
        assert_eq!(game.phase(), Phase::Menu);
        assert!(game.round().is_none());
        assert_eq!(game.session().games_played(), 0);
    }

    #[test]
    fn test_play_opens_category_select() {
        let mut game = new_game();
        click_action(&mut game, ButtonAction::Play);
        assert_eq!(game.phase(), Phase::CategorySelect);
    }

    #[test]
    fn test_selecting_category_starts_round() {
        let mut game = new_game();
        click_action(&mut game, ButtonAction::Play);
        click_action(&mut game, ButtonAction::SelectCategory(1));

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.session().games_played(), 1);
        let round = game.round().unwrap();
        assert_eq!(round.category(), "AWS Storage");
        assert!(game.catalog().get("AWS Storage").unwrap().contains(round.word()));
    }

    #[test]
    fn test_click_outside_controls_is_noop() {
        let mut game = new_game();
        game.handle(UiAction::Click(5, 5));
        assert_eq!(game.phase(), Phase::Menu);
    }

    #[test]
    fn test_action_from_other_phase_is_ignored() {
        let mut game = new_game();
        game.activate(ButtonAction::MainMenu);
        game.activate(ButtonAction::Guess('A'));
        assert_eq!(game.phase(), Phase::Menu);
        assert!(game.handle(UiAction::Letter('A')).is_empty());
    }

    #[test]
    fn test_guessed_letter_control_is_disabled() {
        let mut game = new_game();
        click_action(&mut game, ButtonAction::Play);
        click_action(&mut game, ButtonAction::SelectCategory(0));

        // A letter absent from every compute word in the built-in table
        let cues = click_action(&mut game, ButtonAction::Guess('Q'));
        assert_eq!(cues, vec![SoundCue::Wrong]);
        let button = game
            .buttons()
            .iter()
            .find(|b| b.action() == ButtonAction::Guess('Q'))
            .unwrap()
            .clone();
        assert!(!game.is_enabled(&button));

        assert!(click_action(&mut game, ButtonAction::Guess('Q')).is_empty());
        assert_eq!(game.round().unwrap().wrong_count(), 1);
    }

    #[test]
    fn test_typed_symbol_is_ignored() {
        let mut game = new_game();
        click_action(&mut game, ButtonAction::Play);
        click_action(&mut game, ButtonAction::SelectCategory(0));

        for symbol in ['!', '?', ' ', '-', '#', 'é'] {
            assert!(game.handle(UiAction::Letter(symbol)).is_empty());
        }

        let round = game.round().unwrap();
        assert_eq!(round.wrong_count(), 0);
        assert!(round.guessed_letters().is_empty());
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_pointer_tracks_motion() {
        let mut game = new_game();
        game.handle(UiAction::PointerMoved(310, 260));
        assert_eq!(game.pointer(), (310, 260));
        assert!(game.buttons()[0].is_hovered(game.pointer()));
    }

    #[test]
    fn test_quit() {
        let mut game = new_game();
        game.handle(UiAction::Quit);
        assert!(game.quit_requested());
    }
}
