//! The command loop.
//!
//! A `Session` owns one `EventStore` for its lifetime. It reads lines, runs
//! each command to completion, and writes the reply before reading the next.

use crate::commands::{Command, Reply};
use crate::render::Render;
use anyhow::{Context, Result};
use datebook_core::EventStore;
use std::io::{BufRead, Write};
use tracing::debug;

/// Counters reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines handled
    pub commands: usize,
    /// Commands that reported an error
    pub failures: usize,
    /// Whether input ended with `Exit` rather than EOF
    pub exited: bool,
}

pub struct Session<W: Write> {
    store: EventStore,
    out: W,
    color: bool,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, color: bool) -> Self {
        Session {
            store: EventStore::new(),
            out,
            color,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Process `input` until `Exit` or end of input.
    ///
    /// Lines are decoded lossily, so stray non-UTF-8 bytes end up as U+FFFD
    /// in event names instead of ending the session.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read input line")?;
            if read == 0 {
                break;
            }

            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(['\n', '\r']);

            let Some(command) = Command::parse(line) else {
                continue;
            };
            summary.commands += 1;
            debug!(?command, "executing");

            match command.execute(&mut self.store) {
                Reply::Lines(lines) => {
                    for output in lines {
                        writeln!(self.out, "{}", output)
                            .context("Failed to write output")?;
                    }
                }
                Reply::Failed(failure) => {
                    summary.failures += 1;
                    debug!(%failure, "command failed");
                    writeln!(self.out, "{}", failure.render(self.color))
                        .context("Failed to write output")?;
                }
                Reply::Exit => {
                    summary.exited = true;
                    break;
                }
            }
        }

        self.out.flush().context("Failed to flush output")?;
        Ok(summary)
    }
}
