//! Writing command results to stdout.
//!
//! Logs go through `tracing` (stderr); the data a command was asked for is
//! written here so it can be piped.

use std::io::{self, ErrorKind, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::commands::CommandError;

/// How dumps are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable columns
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Write a block of text to stdout, adding a trailing newline if missing.
///
/// # Errors
///
/// Returns any write error except a closed pipe (e.g. `| head`).
pub fn emit(text: &str) -> io::Result<()> {
    write_block(&mut io::stdout().lock(), text)
}

/// Serialize `value` as pretty JSON and write it to stdout.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized or stdout cannot be
/// written.
pub fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CommandError> {
    emit(&serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn write_block<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let result = out.write_all(text.as_bytes()).and_then(|()| {
        if text.ends_with('\n') {
            Ok(())
        } else {
            out.write_all(b"\n")
        }
    });
    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
