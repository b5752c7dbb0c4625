//! Core data models

pub mod money;

pub use money::Money;
