use crate::display::QueueFormatter;
use crate::error::ControllerError;
use crate::piece::{Piece, PieceFactory};
use crate::queue::PieceQueue;
use rand::rngs::StdRng;
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Refresh,
    Quit,
}

impl FromStr for Command {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(1) => Ok(Command::Play),
            Ok(2) => Ok(Command::Refresh),
            Ok(0) => Ok(Command::Quit),
            _ => Err(ControllerError::invalid_input(trimmed)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub played: Piece,
    pub inserted: Piece,
}

/// Menu loop around the preview queue. Every play is followed by exactly one
/// refill, so outside of `play` the queue is always full.
pub struct Controller<R: Rng = StdRng> {
    queue: PieceQueue,
    factory: PieceFactory<R>,
}

impl<R: Rng> Controller<R> {
    pub fn new(mut factory: PieceFactory<R>) -> Self {
        let queue = PieceQueue::filled(&mut factory);
        Controller { queue, factory }
    }

    /// Takes over an existing queue as is, without initializing it.
    pub fn from_parts(queue: PieceQueue, factory: PieceFactory<R>) -> Self {
        Controller { queue, factory }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn play(&mut self) -> Result<PlayOutcome, ControllerError> {
        let played = self.queue.dequeue()?;
        let inserted = self.factory.generate();
        self.queue.enqueue(inserted)?;

        info!(played = played.id(), inserted = inserted.id(), "piece played");
        Ok(PlayOutcome { played, inserted })
    }

    /// Runs until the user quits or the input is exhausted.
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        mut input: I,
        out: &mut W,
    ) -> Result<(), ControllerError> {
        loop {
            write!(out, "{}", QueueFormatter::format_queue(&self.queue))?;
            write!(out, "{}", QueueFormatter::format_menu())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                info!("input closed, leaving the menu");
                write!(out, "\n{}", QueueFormatter::format_goodbye())?;
                return Ok(());
            }
            writeln!(out)?;

            match self.dispatch(&line, out) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "menu action rejected");
                    write!(out, "{}", QueueFormatter::format_error(&err.to_string()))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Returns `false` once the user asked to quit.
    fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool, ControllerError> {
        match line.parse::<Command>()? {
            Command::Play => {
                let outcome = self.play()?;
                write!(
                    out,
                    "{}",
                    QueueFormatter::format_play(&outcome.played, &outcome.inserted)
                )?;
            }
            Command::Refresh => write!(out, "{}", QueueFormatter::format_refresh())?,
            Command::Quit => {
                info!("quit requested");
                write!(out, "{}", QueueFormatter::format_goodbye())?;
                return Ok(false);
            }
        }
        Ok(true)
    }
}
