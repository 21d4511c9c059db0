//! Colored text for the console. Nothing in here touches game state.

use owo_colors::OwoColorize;

use crate::advisor::Suggestion;
use crate::card::Card;
use crate::game::Outcome;
use crate::hand::Hand;

pub fn banner() -> String {
    "=== Welcome to Blackjack with Betting ===".cyan().to_string()
}

pub fn hand_line(hand: &Hand) -> String {
    let score = hand.score();
    let score_str = if hand.is_bust() { score.red().to_string() } else { score.green().to_string() };
    format!("Hand: {} (Score: {}, Bet: ${})", hand.fmt_inline(), score_str, hand.wager())
}

/// Dealer's hand with the hole card concealed. No score is shown.
pub fn hidden_hand_line(hand: &Hand) -> String {
    let visible = hand.cards.iter().skip(1).map(Card::to_string).collect::<Vec<_>>().join(", ");
    format!("{}, {}", "[Hidden]".blue(), visible)
}

pub fn suggestion(s: Suggestion) -> String {
    format!("(Suggestion: {s})").yellow().to_string()
}

pub fn busted() -> String {
    "You busted!".red().to_string()
}

pub fn dealer_busts() -> String {
    "Dealer busts!".green().to_string()
}

pub fn outcome_line(index: usize, outcome: Outcome, wager: u32) -> String {
    match outcome {
        Outcome::Bust => format!("Hand {index}: You busted and lost ${wager}.").red().to_string(),
        Outcome::Win => format!("Hand {index}: You win ${}!", outcome.payout(wager)).green().to_string(),
        Outcome::Push => format!("Hand {index}: Push. You get your ${wager} back.").yellow().to_string(),
        Outcome::Lose => format!("Hand {index}: You lost ${wager}.").red().to_string(),
    }
}

pub fn balance(balance: u32) -> String {
    format!("Your balance: ${balance}").cyan().to_string()
}

pub fn out_of_money() -> String {
    "You're out of money. Game over!".red().to_string()
}

pub fn farewell(balance: u32) -> String {
    format!("Thanks for playing! Final balance: ${balance}").magenta().to_string()
}
