use anyhow::{Context, Result};
use crossterm::event::EventStream;
use futures::{FutureExt, StreamExt};

use super::handler::{InputEvent, InputHandler};

/// A non-blocking supply of player input, drained once per tick
pub trait InputSource {
    /// Next pending event, or `None` once nothing else is waiting right now
    fn next_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Reads key presses from the terminal without waiting for them
pub struct TerminalInput {
    events: EventStream,
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        // events the game has no use for are skipped, not returned
        while let Some(polled) = self.events.next().now_or_never() {
            let Some(event) = polled else {
                return Ok(None);
            };
            let event = event.context("Failed to read terminal event")?;
            if let Some(input) = self.handler.handle_event(&event) {
                return Ok(Some(input));
            }
        }

        Ok(None)
    }
}
