//! Terminal output helpers for the one-shot commands.
//!
//! Status messages go to stderr so stdout carries only the query result. Colour is applied
//! only when the target stream is a terminal.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use is_terminal::IsTerminal;
use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

/// The logical parts of the output that get a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Info,
    Warn,
    Error,
    DiffHeader,
    DiffAdded,
    DiffRemoved,
}

impl Style {
    fn color(self) -> AnsiColors {
        match self {
            Style::Info => AnsiColors::Cyan,
            Style::Warn => AnsiColors::Yellow,
            Style::Error => AnsiColors::BrightRed,
            Style::DiffHeader => AnsiColors::Yellow,
            Style::DiffAdded => AnsiColors::Green,
            Style::DiffRemoved => AnsiColors::Red,
        }
    }
}

fn paint(text: &str, style: Style, supports_color: bool) -> String {
    if supports_color {
        text.color(style.color()).to_string()
    } else {
        text.to_string()
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    style: Style,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{} {}", paint(prefix, style, supports_color), msg)
}

pub fn info_msg(msg: impl AsRef<str>) {
    let color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), "[info]", msg.as_ref(), Style::Info, color);
}

pub fn warn_msg(msg: impl AsRef<str>) {
    let color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), "[warn]", msg.as_ref(), Style::Warn, color);
}

pub fn error_msg(msg: impl AsRef<str>) {
    let color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), "[error]", msg.as_ref(), Style::Error, color);
}

/// Writes a line-level unified diff of `original` against `masked`.
pub fn print_diff<W: Write>(
    original: &str,
    masked: &str,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", paint("--- Diff ---", Style::DiffHeader, supports_color))?;
    let patch = create_patch(original, masked);
    let mut changed = false;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    changed = true;
                    write!(writer, "{}", paint(&format!("- {}", s), Style::DiffRemoved, supports_color))?;
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    write!(writer, "{}", paint(&format!("+ {}", s), Style::DiffAdded, supports_color))?;
                }
                DiffLine::Context(s) => write!(writer, "  {}", s)?,
            }
            if !line_ends_with_newline(line) {
                writeln!(writer)?;
            }
        }
    }
    if !changed {
        writeln!(writer, "No changes.")?;
    }
    writeln!(writer, "{}", paint("--- End Diff ---", Style::DiffHeader, supports_color))?;
    Ok(())
}

fn line_ends_with_newline(line: &DiffLine<'_, str>) -> bool {
    match line {
        DiffLine::Delete(s) | DiffLine::Insert(s) | DiffLine::Context(s) => s.ends_with('\n'),
    }
}
