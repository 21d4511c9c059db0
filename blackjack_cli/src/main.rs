mod advisor;
mod card;
mod cli;
mod dealer;
mod deck;
mod error;
mod game;
mod hand;
mod input;
mod player;
mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();

    // stderr keeps log lines out of the table output
    let level = if args.debug { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(args.debug)
        .init();

    let balance = args.run();
    tracing::debug!(balance, "exiting");
}
