//! Interactive terminal interface
//!
//! A minimal amount-entry screen demonstrating the live masking adapter:
//! every keystroke is routed through `CurrencyMask::format`, keeping the
//! field formatted while the user types.

pub mod app;
pub mod event;
pub mod terminal;
pub mod widgets;

pub use terminal::run_tui;
