// src/monitor/renderer.rs
//! Batch renderers for the monitor
//!
//! A renderer receives each drained batch exactly once, in drain order. Two
//! implementations: a line per event, and a fixed-width "waterfall" snapshot
//! reprinted after every batch.

use crate::monitor::event_log::StateEvent;
use crate::sim::philosopher::PhilosopherState;
use std::io::{self, Write};

/// Batch output capability, chosen at canteen construction
pub trait Renderer: Send {
    fn render(&mut self, batch: &[StateEvent]) -> io::Result<()>;
}

/// One text line per state change: `Philosopher #3 dines`
pub struct LineRenderer<W> {
    out: W,
}

impl LineRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for LineRenderer<W> {
    fn render(&mut self, batch: &[StateEvent]) -> io::Result<()> {
        for event in batch {
            writeln!(self.out, "Philosopher #{} {}", event.seat, event.state)?;
        }
        self.out.flush()
    }
}

/// Fixed-width snapshot, one symbol per seat, one line per batch
///
/// A seat untouched by the current batch keeps its previous symbol; a later
/// event for the same seat within a batch supersedes the earlier one.
pub struct WaterfallRenderer<W> {
    out: W,
    buffer: Vec<char>,
}

impl WaterfallRenderer<io::Stdout> {
    pub fn stdout(seats: usize) -> Self {
        Self::new(io::stdout(), seats)
    }
}

impl<W: Write> WaterfallRenderer<W> {
    pub fn new(out: W, seats: usize) -> Self {
        Self {
            out,
            buffer: vec![PhilosopherState::Thinking.symbol(); seats],
        }
    }

    /// Current snapshot line
    pub fn snapshot(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Renderer for WaterfallRenderer<W> {
    fn render(&mut self, batch: &[StateEvent]) -> io::Result<()> {
        for event in batch {
            if event.seat >= self.buffer.len() {
                self.buffer
                    .resize(event.seat + 1, PhilosopherState::Thinking.symbol());
            }
            self.buffer[event.seat] = event.state.symbol();
        }

        let line: String = self.buffer.iter().collect();
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}
