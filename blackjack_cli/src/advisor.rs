//! Basic hit/stand advice from the player's score and the dealer's up card.

use std::fmt;

use crate::card::Rank;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Suggestion { Hit, Stand }

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Hit => write!(f, "Hit"),
            Suggestion::Stand => write!(f, "Stand"),
        }
    }
}

/// Value assumed for an up card whose label is not a known rank.
const UNKNOWN_UP_CARD_VALUE: u32 = 10;

pub fn suggest_move(player_score: u32, dealer_up: &str) -> Suggestion {
    let dealer_value = Rank::from_label(dealer_up).map_or(UNKNOWN_UP_CARD_VALUE, Rank::value);
    if player_score >= 17 {
        Suggestion::Stand
    } else if player_score <= 11 {
        Suggestion::Hit
    } else if dealer_value >= 7 {
        Suggestion::Hit
    } else {
        Suggestion::Stand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_basic_table() {
        assert_eq!(suggest_move(10, "9"), Suggestion::Hit);
        assert_eq!(suggest_move(18, "6"), Suggestion::Stand);
        assert_eq!(suggest_move(15, "9"), Suggestion::Hit);
        assert_eq!(suggest_move(15, "4"), Suggestion::Stand);
        assert_eq!(suggest_move(17, "Ace"), Suggestion::Stand);
    }

    #[test]
    fn stiff_hands_hit_against_ace_and_faces() {
        assert_eq!(suggest_move(12, "Ace"), Suggestion::Hit);
        assert_eq!(suggest_move(16, "King"), Suggestion::Hit);
        assert_eq!(suggest_move(12, "6"), Suggestion::Stand);
        assert_eq!(suggest_move(11, "2"), Suggestion::Hit);
    }

    #[test]
    fn unknown_up_card_counts_as_ten() {
        assert_eq!(suggest_move(14, "Joker"), Suggestion::Hit);
        assert_eq!(suggest_move(20, "Joker"), Suggestion::Stand);
    }
}
