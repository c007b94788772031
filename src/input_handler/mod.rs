use std::io;

use common::Square;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H][1-8]) *[- ]? *([a-hA-H][1-8])$")
        .expect("COORDINATE_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

/// A line typed by the human player.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerInput {
    Move { from: Square, to: Square },
    Undo,
    Hint,
    Quit,
}

/// Accepts `e2e4`, `e2 e4` or `e2-e4`, plus the `undo`, `hint` and `quit`
/// commands.
pub fn parse_input(raw: &str) -> Result<PlayerInput, InputError> {
    let raw = raw.trim();
    match raw.to_ascii_lowercase().as_str() {
        "undo" | "u" => return Ok(PlayerInput::Undo),
        "hint" | "h" => return Ok(PlayerInput::Hint),
        "quit" | "q" | "exit" => return Ok(PlayerInput::Quit),
        _ => (),
    }

    let invalid = || InputError::InvalidInput {
        input: raw.to_string(),
    };
    let caps = COORDINATE_RE.captures(raw).ok_or_else(invalid)?;
    let from = Square::from_algebraic(&caps[1]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&caps[2]).ok_or_else(invalid)?;
    Ok(PlayerInput::Move { from, to })
}

pub fn read_player_input() -> Result<PlayerInput, InputError> {
    let mut input = String::new();
    if let Err(error) = io::stdin().read_line(&mut input) {
        return Err(InputError::IOError {
            error: error.to_string(),
        });
    }
    parse_input(&input)
}
