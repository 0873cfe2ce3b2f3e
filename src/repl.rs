//! Line-mode text fallback.
//!
//! Plays one game per `new` over any `BufRead`/`Write` pair, printing the
//! plain-text board after every game command.

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;

use crate::core::Game;
use crate::types::Outcome;

const HELP: &str = "commands: r|reveal X Y, f|flag X Y, g|group X Y, show, new, q|quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reveal(usize, usize),
    Flag(usize, usize),
    Group(usize, usize),
    Show,
    New,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` expects two coordinates: X Y")]
    MissingCoordinates(String),
    #[error("`{0}` is not a valid coordinate")]
    BadCoordinate(String),
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let name = name.to_lowercase();

        let coords = |mut words: std::str::SplitWhitespace<'_>| {
            let (Some(x), Some(y), None) = (words.next(), words.next(), words.next()) else {
                return Err(CommandError::MissingCoordinates(name.clone()));
            };
            let parse = |s: &str| {
                s.parse::<usize>()
                    .map_err(|_| CommandError::BadCoordinate(s.to_string()))
            };
            Ok((parse(x)?, parse(y)?))
        };

        let command = match name.as_str() {
            "r" | "reveal" => coords(words).map(|(x, y)| Command::Reveal(x, y))?,
            "f" | "flag" => coords(words).map(|(x, y)| Command::Flag(x, y))?,
            "g" | "group" => coords(words).map(|(x, y)| Command::Group(x, y))?,
            "show" => Command::Show,
            "new" => Command::New,
            "q" | "quit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };
        Ok(Some(command))
    }
}

fn check_range(game: &Game, x: usize, y: usize) -> Result<(), CommandError> {
    if x < game.width() && y < game.height() {
        Ok(())
    } else {
        Err(CommandError::OutOfRange {
            x,
            y,
            width: game.width(),
            height: game.height(),
        })
    }
}

fn print_board<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    writeln!(out, "{game}")?;
    Ok(())
}

/// Run the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(mut game: Game, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{HELP}")?;
    print_board(&game, out)?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                continue;
            }
        };

        let was_over = game.is_over();
        match command {
            Command::Quit => break,
            Command::Show => {
                print_board(&game, out)?;
                continue;
            }
            Command::New => {
                game = game.fresh();
                tracing::info!("game restarted");
                print_board(&game, out)?;
                continue;
            }
            Command::Reveal(x, y) | Command::Flag(x, y) | Command::Group(x, y) => {
                if let Err(e) = check_range(&game, x, y) {
                    writeln!(out, "Error: {e}")?;
                    continue;
                }
                match command {
                    Command::Reveal(..) => game.reveal(x, y),
                    Command::Flag(..) => game.flag(x, y),
                    _ => game.group_reveal(x, y),
                };
            }
        }

        print_board(&game, out)?;
        if !was_over && game.is_over() {
            let banner = match game.outcome() {
                Outcome::Won => "You Won!",
                _ => "You Lost",
            };
            writeln!(out, "{:.1} seconds", game.elapsed_seconds())?;
            writeln!(out, "{banner}")?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Command::parse("r 1 2"), Ok(Some(Command::Reveal(1, 2))));
        assert_eq!(Command::parse("FLAG 0 3"), Ok(Some(Command::Flag(0, 3))));
        assert_eq!(Command::parse("  group 4 4 "), Ok(Some(Command::Group(4, 4))));
        assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("show"), Ok(Some(Command::Show)));
        assert_eq!(Command::parse(""), Ok(None));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(
            Command::parse("dig 1 1"),
            Err(CommandError::Unknown("dig".to_string()))
        );
        assert_eq!(
            Command::parse("r 1"),
            Err(CommandError::MissingCoordinates("r".to_string()))
        );
        assert_eq!(
            Command::parse("r 1 2 3"),
            Err(CommandError::MissingCoordinates("r".to_string()))
        );
        assert_eq!(
            Command::parse("f -1 2"),
            Err(CommandError::BadCoordinate("-1".to_string()))
        );
    }

    #[test]
    fn plays_to_a_win() {
        let game = Game::with_mines(4, 4, &[(3, 3)]).unwrap();
        let mut out = Vec::new();
        run(game, "r 0 0\nf 3 3\nshow\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("No board available."));
        assert!(text.contains("You Won!"));
        assert_eq!(text.matches("You Won!").count(), 1);
        let board = "  0 1 2 3\n0        \n1        \n2     1 1\n3     1 ?\n";
        assert!(text.ends_with(board), "{text}");
    }

    #[test]
    fn out_of_range_is_an_error_line() {
        let game = Game::with_mines(3, 3, &[(2, 2)]).unwrap();
        let mut out = Vec::new();
        run(game, "r 5 0\nq\nr 0 0\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Error: cell (5, 0) is outside the 3x3 board"));
        // Nothing after quit is processed.
        assert!(!text.contains("You Won!"));
        assert_eq!(text.matches("No board available.").count(), 1);
    }
}
