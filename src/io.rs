// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::Greeting;

/// Writes a single `Hi <name>` line to `writer`. If the writer cannot
/// accept the line an error will be returned.
pub fn greet_to<W: Write>(writer: &mut W, name: &str) -> Result<()> {
    let greeting = Greeting::new(name);
    debug!(name, "greeting");
    writeln!(writer, "{greeting}").with_context(|| format!("Failed to write greeting for {name:?}"))
}

/// Writes a single `Hi <name>` line to standard output.
pub fn greet(name: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    greet_to(&mut stdout, name)?;
    stdout.flush().context("Failed to flush standard output")
}

/// Greets each of `names` in order. Stops at the first name that cannot
/// be written.
pub fn run_to<W, S>(writer: &mut W, names: &[S]) -> Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    trace!(count = names.len(), "greeting names");
    for name in names {
        greet_to(writer, name.as_ref())?;
    }
    Ok(())
}

/// Greets each of `names` in order on standard output. The output stream
/// is held for the whole run so lines are never interleaved.
pub fn run<S: AsRef<str>>(names: &[S]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    run_to(&mut stdout, names)?;
    stdout.flush().context("Failed to flush standard output")
}
