use std::num::{IntErrorKind, ParseIntError};

use crate::error::BetError;
use crate::game::GameSettings;
use crate::hand::Hand;
use crate::input::Prompt;

#[derive(Clone, Debug)]
pub struct Player {
    pub balance: u32,
    pub hands: Vec<Hand>,
    pub broke: bool,
    // Never set anywhere; the round controller still honors it.
    pub play_only_first: bool,
}

impl Player {
    pub fn new(balance: u32) -> Self {
        Self { balance, hands: Vec::new(), broke: false, play_only_first: false }
    }

    /// Check a typed bet against the table limits and the current balance.
    pub fn validate_bet(&self, raw: &str, settings: &GameSettings) -> Result<u32, BetError> {
        let raw = raw.trim();
        let bet: i64 = raw.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => BetError::AboveTableMax { max: settings.table_max },
            IntErrorKind::NegOverflow => BetError::BelowMinimum { min: settings.min_bet },
            _ => BetError::NotANumber(raw.to_string()),
        })?;
        if bet < settings.min_bet as i64 {
            return Err(BetError::BelowMinimum { min: settings.min_bet });
        }
        if bet > settings.table_max as i64 {
            return Err(BetError::AboveTableMax { max: settings.table_max });
        }
        let bet = bet as u32;
        if bet > self.balance {
            return Err(BetError::InsufficientFunds { bet, balance: self.balance });
        }
        Ok(bet)
    }

    /// Ask for a hand count and a bet per hand. The first refused bet ends placement for
    /// this round, keeping the hands already funded.
    pub fn place_bets(&mut self, settings: &GameSettings, prompt: &mut dyn Prompt) {
        self.hands.clear();
        println!("\nYour current balance: ${}\n", self.balance);

        let Some(num_hands) = self.ask_hand_count(settings, prompt) else {
            tracing::info!("input closed while choosing hand count");
            self.broke = true;
            return;
        };

        for i in 1..=num_hands {
            if self.balance == 0 {
                println!("You have no money left to place another bet.");
                break;
            }

            // closed input stops betting like a refused bet; funded hands still play
            let question = format!("Enter bet for Hand {i} (max ${}): ", settings.table_max);
            let Some(line) = prompt.read_line(&question) else {
                tracing::info!(hand = i, "input closed while betting");
                break;
            };
            match self.validate_bet(&line, settings) {
                Ok(bet) => {
                    self.balance -= bet;
                    self.hands.push(Hand::new(bet));
                    tracing::debug!(hand = i, bet, balance = self.balance, "bet placed");
                    let balance = self.balance;
                    println!("Bet ${bet} placed for Hand {i}. Remaining balance: ${balance}");
                }
                Err(e) => {
                    tracing::debug!(hand = i, error = ?e, "bet refused");
                    println!("{e}");
                    if e.ends_game() {
                        self.broke = true;
                    }
                    break;
                }
            }
        }

        if self.hands.is_empty() {
            self.broke = true;
            println!("You have no active hands. Game over.");
        } else {
            println!();
        }
    }

    fn ask_hand_count(&self, settings: &GameSettings, prompt: &mut dyn Prompt) -> Option<usize> {
        let range = 1..=settings.max_hands;
        let question = format!("How many hands do you want to play (1-{})? ", settings.max_hands);
        loop {
            let line = prompt.read_line(&question)?;
            match line.trim().parse::<usize>() {
                Ok(n) if range.contains(&n) => return Some(n),
                _ => println!("Enter a number between 1 and {}.", settings.max_hands),
            }
        }
    }
}
