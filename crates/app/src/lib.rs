//! Application layer for the `teamassess` command-line tool.
//!
//! The main entry point is [`run`], which installs logging, runs the startup
//! self-checks, resolves settings (CLI > environment > config file > defaults),
//! opens the assessment store and dispatches the parsed command.
//!
//! Command handlers write to any `std::io::Write`, so they can be driven
//! against an in-memory store in tests via [`Session`] and [`execute`].

mod app;
pub mod cli;
mod commands;
pub mod config;

pub use app::{execute, run, self_check, Session, Store};
