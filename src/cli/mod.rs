//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod palette_list;
pub mod script;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::cli::palette_list::list_palette;
use crate::cli::script::run_script;
use crate::cli::settings::{set_value, unset_value, update_config};
use crate::core::config::{data::path_display, Config};
use crate::ui::event_loop::run_ui;
use crate::utils::logging::init_tracing;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    ")"
);

#[derive(Parser)]
#[command(name = "marquee")]
#[command(version = VERSION)]
#[command(about = "Pick a color and an animation for a heading, then apply them")]
#[command(
    long_about = "Marquee is a small full-screen terminal app. Pick a color and an animation \
from the two option lists, then press Apply to paint the heading. Reset puts everything back.\n\n\
Controls:\n\
  Tab/Shift+Tab     Move focus between the lists and the buttons\n\
  Left/Right, h/l   Move within the focused list\n\
  Enter/Space       Pick the option or press the button under the cursor\n\
  a                 Apply\n\
  r                 Reset\n\
  q/Esc/Ctrl+C      Quit\n\
  Mouse             Click an option or a button\n\n\
Configuration keys (marquee set KEY VALUE):\n\
  theme             dark or light\n\
  default-color     Heading color before anything is applied, e.g. #505050\n\
  feedback-seconds  How long the feedback line stays visible\n\
  animation-millis  How long one heading animation runs\n\
  color.<key>       Override a palette color, e.g. color.blue #000080"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable logging to specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive interface (default)
    Run {
        /// Theme to use for this session (dark or light)
        #[arg(short = 't', long)]
        theme: Option<String>,
    },
    /// Apply a selection without a terminal and print the issued commands
    Apply {
        /// Color key to pick (blue, red, green or none)
        #[arg(short = 'c', long)]
        color: Option<String>,
        /// Animation key to pick (bounce, shake, fade or none)
        #[arg(short = 'a', long)]
        animation: Option<String>,
        /// Also deliver the animation-finished notification
        #[arg(long)]
        finish: bool,
    },
    /// List palette colors and animations
    Palette,
    /// Show the current configuration
    Config,
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        value: String,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Run { theme: None });
    let interactive = matches!(command, Commands::Run { .. });
    init_tracing(args.log.as_deref(), interactive)?;

    match command {
        Commands::Run { theme } => {
            let config = Config::load()?;
            let theme_name = theme.unwrap_or_else(|| config.theme_name().to_string());
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            runtime.block_on(run_ui(config, &theme_name))
        }
        Commands::Apply {
            color,
            animation,
            finish,
        } => {
            let config = Config::load()?;
            run_script(&config, color.as_deref(), animation.as_deref(), finish);
            Ok(())
        }
        Commands::Palette => {
            let config = Config::load()?;
            list_palette(&config);
            Ok(())
        }
        Commands::Config => {
            let config = Config::load()?;
            config.print_all();
            println!("\nConfig file: {}", path_display(Config::config_path()?));
            Ok(())
        }
        Commands::Set { key, value } => {
            match update_config(|config| set_value(config, &key, &value)) {
                Ok(message) => {
                    info!(%key, "setting updated");
                    println!("{message}");
                }
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            match update_config(|config| unset_value(config, &key)) {
                Ok(message) => {
                    info!(%key, "setting removed");
                    println!("{message}");
                }
                Err(err) => {
                    err.print();
                    std::process::exit(err.exit_code());
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let args = Args::try_parse_from(["marquee"]).expect("parse");
        assert!(args.command.is_none());
        assert!(args.log.is_none());
    }

    #[test]
    fn parses_apply_flags_and_global_log() {
        let args = Args::try_parse_from([
            "marquee", "apply", "--color", "blue", "-a", "shake", "--finish", "-l", "out.log",
        ])
        .expect("parse");
        match args.command {
            Some(Commands::Apply {
                color,
                animation,
                finish,
            }) => {
                assert_eq!(color.as_deref(), Some("blue"));
                assert_eq!(animation.as_deref(), Some("shake"));
                assert!(finish);
            }
            _ => panic!("expected apply"),
        }
        assert_eq!(args.log, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn long_help_lists_every_cursor_key() {
        let long_about = Args::command()
            .get_long_about()
            .map(|text| text.to_string())
            .unwrap_or_default();
        assert!(long_about.contains("Left/Right, h/l"));
    }

    #[test]
    fn set_requires_a_value() {
        assert!(Args::try_parse_from(["marquee", "set", "theme"]).is_err());
    }
}
