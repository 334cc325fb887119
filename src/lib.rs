// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Greets names.
//!
//! Each name produces exactly one line of the form `Hi <name>`. The
//! [io] module writes greetings to a sink, either standard output or
//! any [std::io::Write] implementation.
//!
//! # Quick Start
//!
//! ```no_run
//! use hi::io;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     io::greet("world")?;
//!     io::run(&hi::DEFAULT_NAMES)?;
//!     Ok(())
//! }
//! ```
//!
//! Rendering without writing:
//!
//! ```
//! use hi::Greeting;
//!
//! assert_eq!(Greeting::new("world").to_string(), "Hi world");
//! ```

use std::fmt;

pub mod io;

/// Names greeted when none are supplied, in order.
pub const DEFAULT_NAMES: [&str; 2] = ["world", "javascript"];

/// A single greeting for a borrowed name.
///
/// Displays as `Hi <name>` with no trailing line break. Any text is a
/// valid name, including the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting<'a> {
    name: &'a str,
}

impl<'a> Greeting<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// The name being greeted.
    pub fn name(&self) -> &'a str {
        self.name
    }
}

impl fmt::Display for Greeting<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hi {}", self.name)
    }
}
