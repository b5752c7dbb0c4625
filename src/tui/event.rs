//! Event handling for the TUI
//!
//! Wraps crossterm's event polling into a small typed event stream. Events
//! are delivered serially; each one triggers at most one reformat of the
//! input field, so there is no overlap between mask applications.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Poll timeout elapsed with no input
    Tick,
}

/// Polls crossterm for the next terminal event
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create an event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Block until the next event or tick
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
                _ => {}
            }
        }
        Ok(Event::Tick)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
