use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use gridsweep_core::{ActionOutcome, Board, CellGeometry, PointerAction};
use serde::Serialize;

use crate::render;
use crate::settings::Settings;

/// One line of input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Pointer(PointerAction),
    Show,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let mut point = || -> Result<(u32, u32)> {
            let x = words.next().context("Missing x coordinate")?;
            let y = words.next().context("Missing y coordinate")?;
            Ok((
                x.parse().with_context(|| format!("Invalid x coordinate {:?}", x))?,
                y.parse().with_context(|| format!("Invalid y coordinate {:?}", y))?,
            ))
        };

        let command = match verb.to_lowercase().as_str() {
            "r" | "reveal" => Self::Pointer(PointerAction::reveal(point()?)),
            "f" | "flag" => Self::Pointer(PointerAction::flag(point()?)),
            "d" | "drag" => Self::Pointer(PointerAction::drag(point()?)),
            "n" | "restart" => Self::Pointer(PointerAction::restart()),
            "s" | "show" => Self::Show,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("Unknown command {:?}", other),
        };
        Ok(Some(command))
    }
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    outcome: &'a ActionOutcome,
    rejected: Option<String>,
    mines_left: isize,
}

/// Feeds commands to a board and reports every outcome.
pub struct Session {
    board: Board,
    geometry: CellGeometry,
    json: bool,
}

impl Session {
    pub fn new(settings: &Settings, json: bool) -> Result<Self> {
        let board = Board::new(settings.game_config()).context("Could not create the board")?;
        let geometry = settings.geometry()?;
        log::debug!("Cell geometry {:?}", geometry);
        Ok(Self {
            board,
            geometry,
            json,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Could not read input")?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(output, "error: {:#}", err)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Show => writeln!(output, "{}", render::board(&self.board.snapshot()))?,
                Command::Pointer(action) => {
                    let outcome = self.board.apply_pointer(action, self.geometry);
                    self.report(&outcome, &mut output)?;
                }
            }
        }
        output.flush()?;
        Ok(())
    }

    fn report(&self, outcome: &ActionOutcome, mut output: impl Write) -> Result<()> {
        if self.json {
            let report = Report {
                outcome,
                rejected: outcome.rejected.map(|err| err.to_string()),
                mines_left: self.board.mines_left(),
            };
            serde_json::to_writer(&mut output, &report)?;
            writeln!(output)?;
        } else if let Some(err) = outcome.rejected {
            writeln!(output, "rejected: {}", err)?;
        } else {
            writeln!(
                output,
                "{:?}: {} cells changed, {} mines left",
                outcome.state,
                outcome.dirty.len(),
                self.board.mines_left()
            )?;
        }
        Ok(())
    }
}
