//! Command-line arguments for the blackjack table.
//!
//! ```shell
//! # play with a fresh shuffle every round
//! $ cargo run --bin blackjack_cli
//!
//! # replay the same sequence of shuffles
//! $ cargo run --bin blackjack_cli -- --seed 1234
//! ```

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::game::{Game, GameSettings};
use crate::input::StdinPrompt;

#[derive(Parser, Debug)]
#[command(version, about = "Blackjack against the house, up to three hands at a time", long_about = None)]
pub struct Args {
    /// Seed for the shuffle, for reproducible games. Uses OS entropy if omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log at debug level to stderr (RUST_LOG overrides this).
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn run(self) -> u32 {
        tracing::debug!(seed = ?self.seed, "starting table");
        let mut game = Game::new(GameSettings::default(), self.rng());
        game.run(&mut StdinPrompt::stdin())
    }
}
