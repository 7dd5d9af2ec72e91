//! momo library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::AppContext;
use cli::parser::{Cli, Commands};
use errors::AppResult;
use log::LevelFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::report::handle(ctx),
        Some(Commands::Track) => cli::commands::track::handle(ctx),
        Some(cmd @ Commands::List { .. }) => cli::commands::list::handle(cmd, ctx),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, ctx),
    }
}

/// Verbosity from `-v` flags; `RUST_LOG` still takes precedence when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging, before anything else can log
    init_logging(cli.verbose);

    // 3️⃣ resolve home and reference time once
    let ctx = AppContext::from_cli(&cli)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &ctx)
}
