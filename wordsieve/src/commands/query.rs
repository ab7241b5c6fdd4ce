//! One-shot queries over a file or stdin.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use wordsieve_core::{run_query, Query, QueryOutput, Vocabulary};

use crate::ui::output;

/// Options for a single query run.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub input_file: Option<PathBuf>,
    pub json: bool,
    pub diff: bool,
}

/// Reads the whole input, from `path` or stdin.
pub fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            if io::stdin().is_terminal() {
                output::info_msg("Reading from stdin; finish with Ctrl-D.");
            }
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes a query result in the plain text form: the masked text as is, one word per line,
/// or `clean`/`dirty: <word>`.
pub fn write_output<W: Write>(writer: &mut W, result: &QueryOutput, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *writer, result)?;
        writeln!(writer)?;
        return Ok(());
    }
    match result {
        QueryOutput::Text(text) => write!(writer, "{}", text)?,
        QueryOutput::Words(words) => {
            for word in words {
                writeln!(writer, "{}", word)?;
            }
        }
        QueryOutput::Validation(v) => match &v.word {
            None => writeln!(writer, "clean")?,
            Some(word) => writeln!(writer, "dirty: {}", word)?,
        },
    }
    Ok(())
}

/// Runs one query and prints the result. Returns whether the input was clean.
pub fn run_query_command(
    vocabulary: &Vocabulary,
    query: Query,
    opts: &QueryOptions,
) -> Result<bool> {
    let text = read_input(opts.input_file.as_ref())?;
    debug!("Running {} over {} characters.", query, text.chars().count());
    let result = run_query(vocabulary, query, &text);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_output(&mut writer, &result, opts.json)?;
    writer.flush()?;

    if opts.diff {
        if let QueryOutput::Text(masked) = &result {
            let stderr_supports_color = io::stderr().is_terminal();
            output::print_diff(&text, masked, &mut io::stderr(), stderr_supports_color)?;
        }
    }
    Ok(result.is_clean())
}

/// Prints the vocabulary, one word per line.
pub fn run_words_command(vocabulary: &Vocabulary) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    for word in vocabulary.words() {
        writeln!(writer, "{}", word)?;
    }
    Ok(())
}
