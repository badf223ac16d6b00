#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::{board::BB, common::ShotError, coord::Coord, player::TargetingStrategy, ui};

/// One line of manual input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Number(i32),
    Garbage,
    Closed,
}

/// Human player: reads a one-based row and column as two separate lines.
///
/// Only the syntax is checked here; bounds and repeats are the board's business.
pub struct ManualStrategy<R, W> {
    input: R,
    output: W,
    line: String,
}

impl ManualStrategy<StdinLock<'static>, Stdout> {
    /// Strategy bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ManualStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Output written so far (prompts and messages).
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt until both numbers parse. `Ok(None)` at end of input.
    pub fn read_target(&mut self) -> io::Result<Option<Coord>> {
        loop {
            let row = match self.read_field(ui::ROW_PROMPT)? {
                Field::Closed => return Ok(None),
                field => field,
            };
            let col = match self.read_field(ui::COL_PROMPT)? {
                Field::Closed => return Ok(None),
                field => field,
            };
            match (row, col) {
                (Field::Number(r), Field::Number(c)) => {
                    return Ok(Some(Coord::new(r - 1, c - 1)))
                }
                _ => writeln!(self.output, "{}", ui::ENTER_NUMBERS)?,
            }
        }
    }

    /// Print `prompt`, read one line and parse it.
    fn read_field(&mut self, prompt: &str) -> io::Result<Field> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            writeln!(self.output)?;
            return Ok(Field::Closed);
        }
        Ok(parse_number(&self.line).map_or(Field::Garbage, Field::Number))
    }
}

/// Non-negative decimal integer, surrounding whitespace ignored.
pub fn parse_number(input: &str) -> Option<i32> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

impl<R: BufRead, W: Write> TargetingStrategy for ManualStrategy<R, W> {
    fn next_target(&mut self, _rng: &mut SmallRng, _history: &BB) -> Option<Coord> {
        match self.read_target() {
            Ok(target) => target,
            Err(e) => {
                warn!("reading a move failed: {}", e);
                None
            }
        }
    }

    fn report_rejection(&mut self, _target: Coord, error: ShotError) {
        if let Err(e) = writeln!(self.output, "{}", error) {
            warn!("could not report rejected shot: {}", e);
        }
    }

    fn shows_rejections(&self) -> bool {
        true
    }
}
