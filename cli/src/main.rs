mod app;
mod config;
mod console;
mod render;

use std::io;

use anyhow::{anyhow, Result};
use clap::Parser;
use taskprompt_core::{seed_demo, InMemoryTaskRepository, TaskService};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Config;
use crate::console::Console;

fn init_tracing(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.log_level.as_deref())?;

    let mut service = TaskService::new(InMemoryTaskRepository::new());
    if !config.no_demo {
        seed_demo(&mut service)?;
    }

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), !config.plain);
    let mut app = App::new(console, service, config.user, !config.plain);
    app.run()?;
    Ok(())
}
