use crate::catalog::is_word_char;
use crate::game::Phase;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Actions the player can perform
///
/// Decouples raw SDL2 events from the game controller so the controller can
/// be driven without a window (tests feed these directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Pointer moved; drives hover highlighting
    PointerMoved(i32, i32),

    /// Left click at logical coordinates
    Click(i32, i32),

    /// Letter or digit typed on the keyboard
    Letter(char),

    /// Window closed
    Quit,
}

/// Input context determines which actions are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Pointer only
    Menus,
    /// Pointer plus keyboard letters
    Guessing,
}

/// Translates SDL2 events into [`UiAction`]s
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menus,
        }
    }

    /// Call before `poll_events` so keyboard guessing is only active in a round
    pub fn update_context(&mut self, phase: Phase) {
        self.context = match phase {
            Phase::Playing => InputContext::Guessing,
            Phase::Menu | Phase::CategorySelect | Phase::GameOver => InputContext::Menus,
        };
    }

    /// Drains pending SDL2 events
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<UiAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Maps a single event; events with no meaning in the current context yield `None`
    pub fn translate(&self, event: &Event) -> Option<UiAction> {
        match *event {
            Event::Quit { .. } => Some(UiAction::Quit),
            Event::MouseMotion { x, y, .. } => Some(UiAction::PointerMoved(x, y)),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(UiAction::Click(x, y)),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } if self.context == InputContext::Guessing => {
                letter_for_key(key).map(UiAction::Letter)
            }
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Guessable character for a key, if any (`A`-`Z`, `0`-`9`)
pub fn letter_for_key(key: Keycode) -> Option<char> {
    let name = key.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()).filter(|c| is_word_char(*c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left_click(x: i32, y: i32) -> Event {
        Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x,
            y,
        }
    }

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Menus);
    }

    #[test]
    fn test_context_follows_phase() {
        let mut input = InputSystem::new();
        input.update_context(Phase::Playing);
        assert_eq!(input.context, InputContext::Guessing);
        input.update_context(Phase::GameOver);
        assert_eq!(input.context, InputContext::Menus);
    }

    #[test]
    fn test_translate_quit_and_click() {
        let input = InputSystem::new();
        assert_eq!(
            input.translate(&Event::Quit { timestamp: 0 }),
            Some(UiAction::Quit)
        );
        assert_eq!(
            input.translate(&left_click(120, 45)),
            Some(UiAction::Click(120, 45))
        );
    }

    #[test]
    fn test_right_click_is_ignored() {
        let input = InputSystem::new();
        let event = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Right,
            clicks: 1,
            x: 10,
            y: 10,
        };
        assert_eq!(input.translate(&event), None);
    }

    #[test]
    fn test_letter_for_key() {
        assert_eq!(letter_for_key(Keycode::A), Some('A'));
        assert_eq!(letter_for_key(Keycode::Z), Some('Z'));
        assert_eq!(letter_for_key(Keycode::Num3), Some('3'));
        assert_eq!(letter_for_key(Keycode::Escape), None);
        assert_eq!(letter_for_key(Keycode::Space), None);
    }
}
