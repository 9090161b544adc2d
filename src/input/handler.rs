use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// The two things a player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Turn the snake on the next tick
    KeyDown(Direction),
    /// Leave the game
    Quit,
}

/// Maps terminal events to game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Translate any terminal event; everything except key presses is ignored
    pub fn handle_event(&self, event: &Event) -> Option<InputEvent> {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            _ => None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let direction = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up,
            KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down,
            KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left,
            KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right,

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return Some(InputEvent::Quit);
            }

            _ => return None,
        };

        Some(InputEvent::KeyDown(direction))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
