//! CLI progress output.
//!
//! Each resize reports three steps, each finished with ` DONE` on the same
//! line, and folder runs separate items with a dashed rule:
//!
//! ```text
//! Opening Image photos/a/img1.png ... DONE
//! Resizing Image ... DONE
//! Saving Image small/a/img1.png ... DONE
//! ----------
//! ```
//!
//! This is console output for people, not logging. Diagnostics go through
//! `tracing` instead.
//!
//! # Architecture
//!
//! [`format_event`] is pure (returns the exact text for an event) and
//! [`Progress`] is a thin wrapper that writes and flushes it, so tests can
//! capture output into a `Vec<u8>`.

use std::io::{self, Write};
use std::path::PathBuf;

/// A step in a resize run, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Opening(PathBuf),
    Resizing,
    Saving(PathBuf),
    /// Completes the step started by the previous event.
    Done,
    /// Separates items in a folder run.
    ItemFinished,
}

/// Exact text written for `event`. Step starts carry no newline so that the
/// matching [`ProgressEvent::Done`] lands on the same line.
pub fn format_event(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::Opening(path) => format!("Opening Image {} ...", path.display()),
        ProgressEvent::Resizing => "Resizing Image ...".to_string(),
        ProgressEvent::Saving(path) => format!("Saving Image {} ...", path.display()),
        ProgressEvent::Done => " DONE\n".to_string(),
        ProgressEvent::ItemFinished => "----------\n".to_string(),
    }
}

/// Writes progress events to a sink, flushing after each one so partial
/// lines show up while a slow decode or encode is running.
pub struct Progress<W: Write> {
    out: W,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit(&mut self, event: ProgressEvent) -> io::Result<()> {
        self.out.write_all(format_event(&event).as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Progress<io::Stdout> {
    /// Progress printed to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}
