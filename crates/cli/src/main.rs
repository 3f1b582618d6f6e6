//! Command-line interface for the `teamassess` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `teamassess-app` crate.

fn main() -> anyhow::Result<()> {
    teamassess_app::run()
}
