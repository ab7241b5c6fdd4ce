// wordsieve/tests/cli_integration_tests.rs
//! Command-line integration tests for the `wordsieve` binary.
//!
//! Each test writes a throwaway dictionary with `tempfile`, runs the binary with
//! `assert_cmd` in an isolated working and config directory, and checks stdout and the
//! exit status. stdout is not a terminal here, so no colour codes appear in the output.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(words: &str) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("words.txt"), words)?;
        Ok(Self { dir })
    }

    fn dict(&self) -> String {
        self.dir.path().join("words.txt").display().to_string()
    }

    /// The binary, isolated from the user's config and `.env`, without a dictionary.
    fn bare_command(&self) -> Command {
        let mut cmd = Command::cargo_bin("wordsieve").unwrap();
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path())
            .env_remove("WORDSIEVE_CONFIG")
            .env_remove("WORDSIEVE_DICT")
            .env("RUST_LOG", "debug");
        cmd
    }

    fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--dict").arg(self.dict());
        cmd
    }
}

#[test]
fn test_replace_from_stdin() -> Result<()> {
    let fx = Fixture::new("bad\nword\n")?;
    fx.command()
        .arg("replace")
        .write_stdin("this is a b.a.d word")
        .assert()
        .success()
        .stdout("this is a *.*.* ****");
    Ok(())
}

#[test]
fn test_replace_custom_mask_and_input_file() -> Result<()> {
    let fx = Fixture::new("bad\n")?;
    let input = fx.dir.path().join("input.txt");
    fs::write(&input, "bad day\n")?;
    fx.command()
        .args(["replace", "--mask", "#", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("### day\n");
    Ok(())
}

#[test]
fn test_replace_diff_goes_to_stderr() -> Result<()> {
    let fx = Fixture::new("bad\n")?;
    fx.command()
        .args(["replace", "--diff"])
        .write_stdin("bad day\n")
        .assert()
        .success()
        .stdout("*** day\n")
        .stderr(predicate::str::contains("- bad day").and(predicate::str::contains("+ *** day")));
    Ok(())
}

#[test]
fn test_filter_and_find_all() -> Result<()> {
    let fx = Fixture::new("bad\nword\n")?;
    fx.command()
        .arg("filter")
        .write_stdin("bad bad word")
        .assert()
        .success()
        .stdout("bad\nword\n");
    fx.command()
        .args(["find-all", "--json"])
        .write_stdin("bad bad word")
        .assert()
        .success()
        .stdout("[\"bad\",\"bad\",\"word\"]\n");
    Ok(())
}

#[test]
fn test_validate_exit_codes() -> Result<()> {
    let fx = Fixture::new("bad\n")?;
    fx.command()
        .arg("validate")
        .write_stdin("this is clean")
        .assert()
        .success()
        .stdout("clean\n");
    fx.command()
        .arg("validate")
        .write_stdin("a b a d thing")
        .assert()
        .code(1)
        .stdout("dirty: bad\n");
    Ok(())
}

#[test]
fn test_words_lists_sorted_vocabulary() -> Result<()> {
    let fx = Fixture::new("# comment\nword\nBad\n\nbad\n")?;
    fx.command()
        .arg("words")
        .assert()
        .success()
        .stdout("bad\nword\n");
    Ok(())
}

#[test]
fn test_missing_dictionary_fails() -> Result<()> {
    let fx = Fixture::new("bad\n")?;
    fx.bare_command()
        .args(["--dict", "does-not-exist.txt", "filter"])
        .write_stdin("bad")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist.txt"));
    Ok(())
}

#[test]
fn test_config_file_sets_mask_and_load_policy() -> Result<()> {
    let fx = Fixture::new("bad\n")?;
    let config = fx.dir.path().join("config.yaml");
    fs::write(
        &config,
        "dictionary:\n  on_load_failure: empty\nsieve:\n  matching:\n    mask: \"#\"\n",
    )?;
    fx.command()
        .arg("--config")
        .arg(&config)
        .arg("replace")
        .write_stdin("bad")
        .assert()
        .success()
        .stdout("###");
    fx.bare_command()
        .arg("--config")
        .arg(&config)
        .args(["--dict", "does-not-exist.txt", "replace"])
        .write_stdin("bad")
        .assert()
        .success()
        .stdout("bad");
    Ok(())
}

#[test]
fn test_mask_flag_must_not_be_alphanumeric() -> Result<()> {
    let fx = Fixture::new("bad\n")?;
    fx.command()
        .args(["replace", "--mask", "a"])
        .write_stdin("bad")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("mask"));
    Ok(())
}
