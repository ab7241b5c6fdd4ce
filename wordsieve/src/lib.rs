// wordsieve/src/lib.rs
//! # wordsieve Service and CLI
//!
//! This crate wraps `wordsieve-core` in an HTTP service and a command-line tool. The
//! service shares one vocabulary between all requests; the one-shot commands load a
//! dictionary, answer a single query over a file or stdin and exit.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;
pub mod server;
pub mod store;
pub mod ui;

pub use config::AppConfig;
pub use server::{create_router, AppState};
