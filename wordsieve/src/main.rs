// wordsieve/src/main.rs
//! wordsieve entry point.
//!
//! Resolves configuration (file, then environment and flags), initializes logging and
//! dispatches to the service or a one-shot query.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use wordsieve::cli::{Cli, Commands};
use wordsieve::commands::{self, query::QueryOptions};
use wordsieve::config::AppConfig;
use wordsieve::logger;
use wordsieve::ui::output;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error_msg(format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::resolve(cli.config.as_deref())?;
    if let Some(dict) = cli.dict {
        config.dictionary.source = dict;
    }

    match cli.command {
        Commands::Serve(cmd) => {
            if let Some(bind) = cmd.bind {
                config.server.bind = bind;
            }
            config.dictionary.persist |= cmd.persist;
            commands::serve::run_serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Words => {
            tokio::task::spawn_blocking(move || {
                let vocabulary = commands::load_vocabulary(&config)?;
                commands::query::run_words_command(&vocabulary)
            })
            .await
            .context("Query task failed")??;
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let Some((query, args)) = command.query() else {
                return Ok(ExitCode::SUCCESS);
            };
            let diff = match &command {
                Commands::Replace(cmd) => {
                    // Goes through the same validation as a mask from the config file.
                    if let Some(mask) = cmd.mask {
                        config.sieve.matching.mask = mask;
                    }
                    cmd.diff
                }
                _ => false,
            };
            let opts = QueryOptions {
                input_file: args.input_file.clone(),
                json: args.json,
                diff,
            };
            let is_validate = matches!(command, Commands::Validate(_));

            let clean = tokio::task::spawn_blocking(move || {
                let vocabulary = commands::load_vocabulary(&config)?;
                commands::query::run_query_command(&vocabulary, query, &opts)
            })
            .await
            .context("Query task failed")??;

            if is_validate && !clean {
                Ok(ExitCode::from(1))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
