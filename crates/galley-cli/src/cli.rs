use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "galley", about = "Galley: dish and order service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print every route and the methods it accepts
    Routes,
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to bind, overriding the config file
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
    /// JSON seed fixture, overriding the config file
    #[arg(short, long)]
    pub seed: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::parse_from([
            "galley", "serve", "--bind", "0.0.0.0:8080", "--seed", "seed.json", "-v",
        ]);
        assert!(cli.verbose);
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind, Some("0.0.0.0:8080".parse::<SocketAddr>().unwrap()));
        assert_eq!(args.seed, Some(PathBuf::from("seed.json")));
        assert!(args.config.is_none());
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        assert!(Cli::try_parse_from(["galley", "serve", "--bind", "nowhere"]).is_err());
    }
}
