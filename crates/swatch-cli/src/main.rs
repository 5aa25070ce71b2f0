mod cli;
mod commands;

use std::process::ExitCode;

use swatch_config::SwatchConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

use crate::cli::Command;
use crate::commands::Context;

const DEFAULT_DIRECTIVE: &str = "swatch=info";

fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn main() -> ExitCode {
    let args = cli::parse();

    let initial = match args.log_level.as_deref() {
        Some(directive) => filter_for(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    };
    // Replaced by the config's level below unless overridden.
    let (filter, handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = swatch_config::load_config_from(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SwatchConfig::default()
    });

    if args.log_level.is_none() && std::env::var_os("RUST_LOG").is_none() {
        let directive = format!("swatch={}", config.logging.level.as_directive());
        if let Err(e) = handle.modify(|filter| *filter = filter_for(&directive)) {
            tracing::warn!("Failed to apply log level from config: {e}");
        }
    }

    let ctx = Context::new(&config);
    let result = match args.command {
        Command::Scan { file, json } => commands::scan(&ctx, &file, json),
        Command::At { file, cursor } => commands::at(&ctx, &file, cursor),
        Command::Set {
            file,
            cursor,
            color,
            write,
        } => commands::set(&ctx, &file, cursor, &color, write),
        Command::Convert {
            file,
            cursor,
            to,
            write,
        } => commands::convert(&ctx, &file, cursor, to, write),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
