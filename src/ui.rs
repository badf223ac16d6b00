#![cfg(feature = "std")]
//! Text shown to the player.

use std::io::{self, Write};

use crate::{
    board::Board,
    common::{ShotError, ShotOutcome},
    coord::Coord,
    game::{GameStatus, MoveOutcome, Side},
};

pub const ROW_PROMPT: &str = "Enter the row number: ";
pub const COL_PROMPT: &str = "Enter the column number: ";
pub const ENTER_NUMBERS: &str = "Please enter numbers.";
pub const CLOSE_PROMPT: &str = "Press Enter to close";

const GREETING: &str = "        Welcome to Sea Battle!
 The goal is to sink every enemy ship.
 Each fleet is scattered at random: four
 1-deck, two 2-deck and one 3-deck ship.
 To make a move, enter the row number and
 then the column number.";

pub fn greet<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GREETING)
}

/// Short text for a shot outcome.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Sunk => "Sunk!",
        ShotOutcome::Hit => "Hit!",
        ShotOutcome::Miss => "Miss.",
    }
}

/// Display the user's board and then the computer's board.
pub fn print_boards<W: Write>(out: &mut W, user: &Board, computer: &Board) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Your board:")?;
    writeln!(out, "{}", user)?;
    writeln!(out)?;
    writeln!(out, "Computer's board:")?;
    writeln!(out, "{}", computer)?;
    writeln!(out)
}

pub fn announce_turn<W: Write>(out: &mut W, side: Side) -> io::Result<()> {
    match side {
        Side::User => writeln!(out, "Your move:"),
        Side::Computer => writeln!(out, "Computer's move:"),
    }
}

pub fn announce_shot<W: Write>(out: &mut W, side: Side, mv: &MoveOutcome) -> io::Result<()> {
    let who = match side {
        Side::User => "You fire",
        Side::Computer => "Computer fires",
    };
    writeln!(out, "{} at {}. {}", who, mv.target, outcome_message(mv.outcome))
}

/// A shot the board refused, for a side whose strategy does not report it itself.
pub fn announce_rejection<W: Write>(
    out: &mut W,
    side: Side,
    target: Coord,
    error: ShotError,
) -> io::Result<()> {
    match side {
        Side::User => writeln!(out, "{}", error),
        Side::Computer => writeln!(out, "Computer tries {}. {}", target, error),
    }
}

pub fn announce_result<W: Write>(out: &mut W, status: GameStatus) -> io::Result<()> {
    match status {
        GameStatus::UserWon => writeln!(out, "You won!"),
        GameStatus::ComputerWon => writeln!(out, "The computer won!"),
        GameStatus::Abandoned => writeln!(out, "Game abandoned."),
        GameStatus::InProgress => Ok(()),
    }
}
