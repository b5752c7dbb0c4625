//! centavos - Currency input masking for terminal finance tools
//!
//! The core of this crate is [`mask::CurrencyMask`], a stateless converter
//! between raw digit strings (as typed incrementally by a user), integer
//! cents, and locale-formatted display strings. Around that core sit a
//! clap CLI and a small ratatui screen demonstrating live masking.
//!
//! # Architecture
//!
//! - `mask`: the masking core and its display-style configuration
//! - `models`: the cents-based `Money` type
//! - `config`: settings file and path management
//! - `cli`: command handlers
//! - `tui`: interactive amount-entry screen and the `AmountInput` widget
//!
//! # Example
//!
//! ```rust
//! use centavos::mask::{CurrencyMask, CurrencyStyle};
//!
//! let mask = CurrencyMask::new(CurrencyStyle::pt_br());
//! assert_eq!(mask.format("500"), "R$ 5,00");
//! assert_eq!(mask.unmask("R$ 1.234,56"), 1234.56);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mask;
pub mod models;
pub mod tui;

pub use error::{MaskError, MaskResult};
pub use mask::{CurrencyMask, CurrencyStyle};
pub use models::Money;
