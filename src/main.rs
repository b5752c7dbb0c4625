use anyhow::Result;
use clap::{Parser, Subcommand};

use centavos::cli::{
    handle_config_command, handle_format_command, handle_parse_command, handle_unmask_command,
    LocalePreset,
};
use centavos::config::{CentavosPaths, Settings};
use centavos::mask::CurrencyMask;

#[derive(Parser)]
#[command(
    name = "centavos",
    version,
    about = "Currency input masking for terminal finance tools",
    long_about = "centavos formats raw digit strings as currency amounts the way \
                  masked input fields do: every digit typed shifts the value left \
                  by one decimal place. It also recovers numeric values from \
                  formatted display strings."
)]
struct Cli {
    /// Locale preset overriding the saved style
    #[arg(short, long, global = true, value_enum)]
    locale: Option<LocalePreset>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a raw digit string as a currency display string
    Format {
        /// Raw input (non-digits are stripped; last two digits are cents)
        raw: String,
    },

    /// Recover a numeric value from a display string (lenient, never fails)
    Unmask {
        /// Display string, formatted or hand-typed
        display: String,
    },

    /// Strictly parse a display string into exact cents
    Parse {
        /// Display string
        display: String,
    },

    /// Launch the interactive amount-entry screen
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CentavosPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let style = match cli.locale {
        Some(preset) => preset.style(),
        None => settings.style.clone(),
    };
    let mask = CurrencyMask::new(style);

    match cli.command {
        Some(Commands::Format { raw }) => {
            handle_format_command(&mask, &raw)?;
        }
        Some(Commands::Unmask { display }) => {
            handle_unmask_command(&mask, &display)?;
        }
        Some(Commands::Parse { display }) => {
            handle_parse_command(&mask, &display)?;
        }
        Some(Commands::Tui) => {
            centavos::tui::run_tui(mask)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings, &mask)?;
        }
        None => {
            println!("centavos - currency input masking");
            println!();
            println!("Run 'centavos --help' for usage information.");
            println!("Run 'centavos tui' to try the interactive amount field.");
        }
    }

    Ok(())
}
