//! Control script language for driving a simulation without a dashboard.
//!
//! A script is line-oriented: one command per line, `#` starts a comment.
//!
//! # Grammar Overview
//!
//! ```text
//! script   = { line }
//! line     = [ command ] [ comment ]
//! comment  = '#' { any_char }
//! command  = setter | "on" | "off" | "up" | "down" | engine | step
//! setter   = ("throttle" | "timing" | "boost" | "afr") number
//!          | "gear" gear_id
//! engine   = "engine" [ identifier ]
//! step     = "step" [ count ]
//! gear_id  = "N" | digit+
//! ```
//!
//! # Example
//!
//! ```text
//! # Pull through first and second
//! engine k20a
//! on
//! gear 1
//! throttle 100
//! step 15
//! up
//! step 15
//! ```

mod command;
mod parser;

pub use command::Command;
pub use parser::parse_line;

use crate::error::Result;

/// Parse a whole script.
pub fn parse(input: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if let Some(cmd) = parse_line(idx + 1, line)? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}

/// Parse a script file.
pub fn parse_file(path: &std::path::Path) -> Result<Vec<Command>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::TunerError::file_read(path, e))?;
    parse(&content)
}
