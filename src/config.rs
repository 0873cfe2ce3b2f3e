//! Command line and environment configuration.
//!
//! - `MINESWEEPER_LOG`: log file path used when `--log-file` is absent
//! - `RUST_LOG`: log level filter (default `info`)

use std::path::PathBuf;

use clap::Parser;

use crate::core::{Game, Result};
use crate::types::{DEFAULT_HEIGHT, DEFAULT_MINES, DEFAULT_WIDTH};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "MINESWEEPER_LOG";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "tui-minesweeper",
    version,
    about = "Text Minesweeper",
    after_help = "Example: tui-minesweeper 5 5 5 -D"
)]
pub struct Args {
    /// Board width
    #[arg(default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height
    #[arg(default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Mine count
    #[arg(default_value_t = DEFAULT_MINES)]
    pub mines: usize,

    /// Use this flag to launch the game if your terminal does not support emoji
    #[arg(short = 'D', long)]
    pub disable_emoji: bool,

    /// Play line by line on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    pub text: bool,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    FullScreen,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    pub emoji: bool,
    pub mode: Mode,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Build from parsed arguments, falling back to the environment for the log path.
    pub fn from_args(args: Args) -> Self {
        let env_log = std::env::var(LOG_ENV).ok();
        Self::resolve(args, env_log)
    }

    fn resolve(args: Args, env_log: Option<String>) -> Self {
        let log_file = args.log_file.or_else(|| {
            env_log
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        });

        Self {
            width: args.width,
            height: args.height,
            mines: args.mines,
            emoji: !args.disable_emoji,
            mode: if args.text { Mode::Text } else { Mode::FullScreen },
            log_file,
        }
    }

    /// Validate the board parameters by constructing the game.
    pub fn new_game(&self) -> Result<Game> {
        Game::new(self.width, self.height, self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn positional_board_parameters() {
        let config = Config::resolve(parse(&["tui-minesweeper", "5", "6", "7"]), None);
        assert_eq!((config.width, config.height, config.mines), (5, 6, 7));
        assert!(config.emoji);
        assert_eq!(config.mode, Mode::FullScreen);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn defaults_when_omitted() {
        let config = Config::resolve(parse(&["tui-minesweeper"]), None);
        assert_eq!(
            (config.width, config.height, config.mines),
            (DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MINES)
        );
    }

    #[test]
    fn disable_emoji_flag() {
        let short = Config::resolve(parse(&["tui-minesweeper", "5", "5", "5", "-D"]), None);
        let long = Config::resolve(
            parse(&["tui-minesweeper", "5", "5", "5", "--disable-emoji"]),
            None,
        );
        assert!(!short.emoji);
        assert!(!long.emoji);
    }

    #[test]
    fn log_file_prefers_flag_over_env() {
        let config = Config::resolve(
            parse(&["tui-minesweeper", "--log-file", "a.log"]),
            Some("b.log".to_string()),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("a.log")));

        let config = Config::resolve(parse(&["tui-minesweeper"]), Some("b.log".to_string()));
        assert_eq!(config.log_file, Some(PathBuf::from("b.log")));

        let config = Config::resolve(parse(&["tui-minesweeper"]), Some("  ".to_string()));
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn rejects_non_numeric_and_negative() {
        assert!(Args::try_parse_from(["tui-minesweeper", "x", "5", "5"]).is_err());
        assert!(Args::try_parse_from(["tui-minesweeper", "5", "-5", "5"]).is_err());
    }

    #[test]
    fn invalid_board_is_reported_by_the_engine() {
        let config = Config::resolve(parse(&["tui-minesweeper", "3", "3", "9"]), None);
        assert!(config.new_game().is_err());
        let config = Config::resolve(parse(&["tui-minesweeper", "1", "10", "5"]), None);
        assert!(config.new_game().is_err());
    }
}
