//! CLI command handlers
//!
//! Bridges clap argument parsing with the masking core. The interactive
//! subcommands use the total `format`/`unmask` surface; `parse` uses the
//! strict surface and fails loudly, which is what batch callers want.

use clap::ValueEnum;

use crate::config::{CentavosPaths, Settings};
use crate::error::MaskResult;
use crate::mask::{CurrencyMask, CurrencyStyle};

/// Built-in locale presets selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LocalePreset {
    /// Brazilian real: "R$ 1.234,56"
    PtBr,
    /// US dollar: "$1,234.56"
    EnUs,
}

impl LocalePreset {
    /// The display style for this preset
    pub fn style(self) -> CurrencyStyle {
        match self {
            LocalePreset::PtBr => CurrencyStyle::pt_br(),
            LocalePreset::EnUs => CurrencyStyle::en_us(),
        }
    }
}

/// Handle the `format` command: mask a raw digit string
pub fn handle_format_command(mask: &CurrencyMask, raw: &str) -> MaskResult<()> {
    println!("{}", mask.format(raw));
    Ok(())
}

/// Handle the `unmask` command: recover a numeric value from a display string
pub fn handle_unmask_command(mask: &CurrencyMask, display: &str) -> MaskResult<()> {
    println!("{}", mask.unmask(display));
    Ok(())
}

/// Handle the `parse` command: strict parsing to exact cents
pub fn handle_parse_command(mask: &CurrencyMask, display: &str) -> MaskResult<()> {
    let amount = mask.parse_money(display)?;
    println!("{}", amount.cents());
    Ok(())
}

/// Handle the `config` command: show paths and the active style
pub fn handle_config_command(
    paths: &CentavosPaths,
    settings: &Settings,
    mask: &CurrencyMask,
) -> MaskResult<()> {
    println!("centavos configuration");
    println!("======================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();
    println!("Saved style:  {} (decimal '{}', grouping '{}')",
        settings.style.symbol, settings.style.decimal_separator, settings.style.group_separator);
    println!("Active style: {} (decimal '{}', grouping '{}')",
        mask.style().symbol, mask.style().decimal_separator, mask.style().group_separator);
    Ok(())
}
