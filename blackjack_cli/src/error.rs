use thiserror::Error;

/// Reasons a single bet is refused. Any of them ends bet placement for the round.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("You must bet at least ${min}.")]
    BelowMinimum { min: u32 },
    #[error("You can't bet more than ${max}.")]
    AboveTableMax { max: u32 },
    #[error("You don't have enough money to bet ${bet} (balance ${balance}). Game over.")]
    InsufficientFunds { bet: u32, balance: u32 },
    #[error("Enter a valid number, not '{0}'.")]
    NotANumber(String),
}

impl BetError {
    pub fn ends_game(&self) -> bool {
        matches!(self, BetError::InsufficientFunds { .. })
    }
}
