use anyhow::Context;
use colored::Colorize;
use galley_server::{GalleyServer, ServerConfig, ROUTES};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Routes => cmd_routes(),
    }
}

/// Resolve the effective config: file values first, then flag overrides.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(seed) = &args.seed {
        config.seed_path = Some(seed.clone());
    }
    tracing::debug!(
        config_file = ?args.config,
        bind_addr = %config.bind_addr,
        seed_path = ?config.seed_path,
        "resolved server config"
    );
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let server = GalleyServer::new(config).context("building server")?;
    println!(
        "{} Galley serving on {}",
        "✓".green().bold(),
        server.config().bind_addr.to_string().bold()
    );
    if let Some(seed) = &server.config().seed_path {
        println!("  Seed: {}", seed.display().to_string().cyan());
    }

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_routes() -> anyhow::Result<()> {
    for (path, methods) in ROUTES {
        println!("{:<20} {}", path.bold(), methods.join(", ").yellow());
    }
    Ok(())
}
