//! Currency display style
//!
//! Locale and currency are explicit configuration rather than a hard-wired
//! pairing, so the same mask logic serves multiple markets.

use serde::{Deserialize, Serialize};

/// How a currency amount is rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyStyle {
    /// Currency symbol prefix (e.g. "R$", "$")
    pub symbol: String,

    /// Separator between groups of three major-unit digits
    #[serde(default = "default_group_separator")]
    pub group_separator: char,

    /// Separator between major and minor units
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    /// Whether a space follows the symbol ("R$ 5,00" vs "$5.00")
    #[serde(default = "default_space_after_symbol")]
    pub space_after_symbol: bool,
}

fn default_group_separator() -> char {
    '.'
}

fn default_decimal_separator() -> char {
    ','
}

fn default_space_after_symbol() -> bool {
    true
}

impl CurrencyStyle {
    /// Brazilian real: "R$ 1.234,56"
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$".to_string(),
            group_separator: '.',
            decimal_separator: ',',
            space_after_symbol: true,
        }
    }

    /// US dollar: "$1,234.56"
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            group_separator: ',',
            decimal_separator: '.',
            space_after_symbol: false,
        }
    }

    /// The symbol prefix including its trailing space, if any
    pub fn prefix(&self) -> String {
        if self.space_after_symbol {
            format!("{} ", self.symbol)
        } else {
            self.symbol.clone()
        }
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::pt_br()
    }
}
