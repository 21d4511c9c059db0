use rand::rngs::StdRng;

use crate::advisor::suggest_move;
use crate::dealer::Dealer;
use crate::deck::Deck;
use crate::hand::{Hand, BLACKJACK};
use crate::input::Prompt;
use crate::player::Player;
use crate::render;

#[derive(Clone, Debug)]
pub struct GameSettings {
    pub starting_balance: u32,
    pub min_bet: u32,
    pub table_max: u32,
    pub max_hands: usize,
    pub dealer_stands_on: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            starting_balance: 500,
            min_bet: 1,
            table_max: 500,
            max_hands: 3,
            dealer_stands_on: 17,
        }
    }
}

/// Result of one player hand against the dealer's final score.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome { Bust, Win, Push, Lose }

impl Outcome {
    /// Chips returned to the balance. The wager was already taken when the bet was placed.
    pub fn payout(self, wager: u32) -> u32 {
        match self {
            Outcome::Win => wager * 2,
            Outcome::Push => wager,
            Outcome::Bust | Outcome::Lose => 0,
        }
    }
}

pub fn settle(player_score: u32, dealer_score: u32) -> Outcome {
    if player_score > BLACKJACK {
        Outcome::Bust
    } else if dealer_score > BLACKJACK || player_score > dealer_score {
        Outcome::Win
    } else if player_score == dealer_score {
        Outcome::Push
    } else {
        Outcome::Lose
    }
}

pub struct Game {
    pub settings: GameSettings,
    pub player: Player,
    rng: StdRng,
    rounds: u32,
}

impl Game {
    pub fn new(settings: GameSettings, rng: StdRng) -> Self {
        let player = Player::new(settings.starting_balance);
        Self { settings, player, rng, rounds: 0 }
    }

    /// Play rounds until the player quits or runs out of chips. Returns the final balance.
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> u32 {
        println!("{}", render::banner());
        while self.player.balance > 0 {
            if !self.play_round(prompt) {
                break;
            }
        }
        tracing::info!(rounds = self.rounds, balance = self.player.balance, "game over");
        println!("\n{}", render::farewell(self.player.balance));
        self.player.balance
    }

    /// One full round. Returns whether another round should follow.
    pub fn play_round(&mut self, prompt: &mut dyn Prompt) -> bool {
        self.player.place_bets(&self.settings, prompt);
        if self.player.broke || self.player.hands.is_empty() {
            return false;
        }
        self.rounds += 1;
        tracing::info!(round = self.rounds, hands = self.player.hands.len(), "round started");

        let mut deck = Deck::new_shuffled(&mut self.rng);
        let mut dealer = Dealer::new(self.settings.dealer_stands_on);
        self.deal_opening(&mut deck, &mut dealer);

        println!("\nDealer's Hand:");
        println!("{}", render::hidden_hand_line(&dealer.hand));

        self.player_turns(&mut deck, &dealer, prompt);
        self.dealer_turn(&mut deck, &mut dealer);
        self.settle_hands(dealer.hand.score());

        println!("\n{}", render::balance(self.player.balance));
        if self.player.balance == 0 {
            println!("{}", render::out_of_money());
            return false;
        }

        match prompt.read_line("\nPlay another round? (Y/N): ") {
            Some(answer) => answer.trim().eq_ignore_ascii_case("y"),
            None => false,
        }
    }

    // two passes: every player hand, then the dealer
    fn deal_opening(&mut self, deck: &mut Deck, dealer: &mut Dealer) {
        for _ in 0..2 {
            for hand in self.player.hands.iter_mut() {
                deal_into(deck, hand);
            }
            deal_into(deck, &mut dealer.hand);
        }
        tracing::debug!(remaining = deck.len(), "opening cards dealt");
    }

    fn player_turns(&mut self, deck: &mut Deck, dealer: &Dealer, prompt: &mut dyn Prompt) {
        // unknown label when the up card is missing, which the advisor scores as ten
        let up = dealer.hand.up_card().map_or("", |c| c.rank.label());

        for (i, hand) in self.player.hands.iter_mut().enumerate() {
            println!("\n--- Playing Hand {} ---", i + 1);
            println!("{}", render::hand_line(hand));

            while hand.active {
                let score = hand.score();
                if score > BLACKJACK {
                    println!("{}", render::busted());
                    hand.active = false;
                    break;
                }

                println!("{}", render::suggestion(suggest_move(score, up)));

                let Some(line) = prompt.read_line("Hit (H) or Stand (S)? ") else {
                    tracing::info!(hand = i + 1, score, "input closed, standing");
                    hand.active = false;
                    break;
                };
                match line.trim().to_uppercase().as_str() {
                    "H" => match deck.deal() {
                        Some(card) => {
                            hand.add(card);
                            println!("You draw {card}.");
                            println!("{}", render::hand_line(hand));
                        }
                        None => {
                            tracing::warn!(hand = i + 1, "deck exhausted on hit");
                            println!("The deck is empty.");
                        }
                    },
                    "S" => {
                        println!("You stand with {score}.");
                        hand.active = false;
                    }
                    _ => println!("Invalid choice. Enter H or S."),
                }
            }

            if self.player.play_only_first {
                println!("\nYou went all-in on Hand 1. Skipping other hands...");
                break;
            }
        }
    }

    fn dealer_turn(&mut self, deck: &mut Deck, dealer: &mut Dealer) {
        println!("\nDealer's turn:");
        println!("{}", render::hand_line(&dealer.hand));
        while dealer.draw(deck).is_some() {
            println!("Dealer hits.");
            println!("{}", render::hand_line(&dealer.hand));
        }

        let score = dealer.hand.score();
        tracing::debug!(score, cards = dealer.hand.cards.len(), "dealer finished");
        if score > BLACKJACK {
            println!("{}", render::dealer_busts());
        } else {
            println!("Dealer stands with {score}.");
        }
    }

    pub fn settle_hands(&mut self, dealer_score: u32) {
        println!("\n=== Round Results ===");
        for (i, hand) in self.player.hands.iter().enumerate() {
            let outcome = settle(hand.score(), dealer_score);
            let payout = outcome.payout(hand.wager());
            self.player.balance += payout;
            tracing::info!(hand = i + 1, ?outcome, wager = hand.wager(), payout, "hand settled");
            println!("{}", render::outcome_line(i + 1, outcome, hand.wager()));
        }
    }
}

fn deal_into(deck: &mut Deck, hand: &mut Hand) {
    match deck.deal() {
        Some(card) => hand.add(card),
        None => tracing::warn!("deck exhausted while dealing"),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::input::ScriptedPrompt;

    fn game(seed: u64) -> Game {
        Game::new(GameSettings::default(), StdRng::seed_from_u64(seed))
    }

    fn hand_of(wager: u32, ranks: &[Rank]) -> Hand {
        let mut h = Hand::new(wager);
        for &r in ranks {
            h.add(Card::new(r, Suit::Diamonds));
        }
        h
    }

    #[test]
    fn settle_covers_every_outcome() {
        assert_eq!(settle(20, 23), Outcome::Win);
        assert_eq!(settle(19, 18), Outcome::Win);
        assert_eq!(settle(17, 17), Outcome::Push);
        assert_eq!(settle(16, 20), Outcome::Lose);
        assert_eq!(settle(22, 18), Outcome::Bust);
        assert_eq!(settle(22, 25), Outcome::Bust);
    }

    #[test]
    fn payouts() {
        assert_eq!(Outcome::Win.payout(50), 100);
        assert_eq!(Outcome::Push.payout(50), 50);
        assert_eq!(Outcome::Lose.payout(50), 0);
        assert_eq!(Outcome::Bust.payout(50), 0);
    }

    #[test]
    fn settlement_updates_balance_per_hand() {
        let mut g = game(1);
        g.player.balance = 300;
        g.player.hands = vec![
            hand_of(50, &[Rank::King, Rank::Queen]),
            hand_of(40, &[Rank::Ten, Rank::Seven]),
            hand_of(30, &[Rank::King, Rank::Five, Rank::Seven]),
        ];
        g.settle_hands(23);
        // 20 and 17 win against a bust, the 22 loses
        assert_eq!(g.player.balance, 300 + 100 + 80);

        g.player.balance = 0;
        g.player.hands = vec![hand_of(40, &[Rank::Ten, Rank::Seven])];
        g.settle_hands(17);
        assert_eq!(g.player.balance, 40);
    }

    #[test]
    fn all_in_bust_ends_without_continue_prompt() {
        let mut g = game(2024);
        let mut answers = vec!["1", "500"];
        answers.extend(std::iter::repeat("H").take(15));
        let mut prompt = ScriptedPrompt::new(&answers);

        assert_eq!(g.run(&mut prompt), 0);
        assert!(!prompt.was_asked("Play another round"));
        assert_eq!(g.player.hands.len(), 1);
        assert!(g.player.hands[0].is_bust());
    }

    #[test]
    fn short_balance_on_second_bet_ends_before_the_deal() {
        let mut g = game(31);
        let mut prompt = ScriptedPrompt::new(&["2", "300", "300"]);

        assert_eq!(g.run(&mut prompt), 200);
        assert!(g.player.broke);
        assert_eq!(g.rounds, 0);
        assert!(g.player.hands[0].cards.is_empty());
        assert!(!prompt.was_asked("Hit (H)"));
        assert!(!prompt.was_asked("Play another round"));
    }

    #[test]
    fn closed_input_mid_betting_plays_funded_hand_then_ends() {
        let mut g = game(32);
        let mut prompt = ScriptedPrompt::new(&["2", "100"]);

        let final_balance = g.run(&mut prompt);
        assert_eq!(g.rounds, 1);
        assert_eq!(g.player.hands.len(), 1);
        assert!(!g.player.hands[0].active);
        assert!([400, 500, 600].contains(&final_balance));
    }

    #[test]
    fn garbled_action_line_reprompts_instead_of_standing() {
        use crate::input::ReaderPrompt;

        let mut g = game(33);
        let input = b"1\n10\n\xff\nH\nS\nN\n".to_vec();
        let mut prompt = ReaderPrompt::new(std::io::Cursor::new(input));

        g.run(&mut prompt);
        assert_eq!(g.rounds, 1);
        assert_eq!(g.player.hands[0].cards.len(), 3);
    }

    #[test]
    fn opening_deal_gives_two_cards_everywhere() {
        let mut g = game(5);
        g.player.hands = vec![Hand::new(10), Hand::new(10), Hand::new(10)];
        let mut deck = Deck::new_shuffled(&mut StdRng::seed_from_u64(5));
        let mut dealer = Dealer::new(17);
        g.deal_opening(&mut deck, &mut dealer);
        assert!(g.player.hands.iter().all(|h| h.cards.len() == 2));
        assert_eq!(dealer.hand.cards.len(), 2);
        assert_eq!(deck.len(), 52 - 8);
    }

    #[test]
    fn invalid_action_reprompts_then_stand_ends_hand() {
        let mut g = game(8);
        g.player.hands = vec![hand_of(10, &[Rank::Two, Rank::Three])];
        let mut deck = Deck::new_shuffled(&mut StdRng::seed_from_u64(8));
        let mut dealer = Dealer::new(17);
        dealer.hand = hand_of(0, &[Rank::Nine, Rank::Six]);
        let mut prompt = ScriptedPrompt::new(&["x", "s"]);

        g.player_turns(&mut deck, &dealer, &mut prompt);
        assert_eq!(prompt.asked.iter().filter(|q| q.contains("Hit (H)")).count(), 2);
        assert!(!g.player.hands[0].active);
        assert_eq!(g.player.hands[0].cards.len(), 2);
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn each_hand_plays_in_order() {
        let mut g = game(9);
        g.player.hands = vec![
            hand_of(10, &[Rank::King, Rank::Nine]),
            hand_of(10, &[Rank::Two, Rank::Three]),
        ];
        let mut deck = Deck::new_shuffled(&mut StdRng::seed_from_u64(9));
        let mut dealer = Dealer::new(17);
        dealer.hand = hand_of(0, &[Rank::Nine, Rank::Six]);
        let mut prompt = ScriptedPrompt::new(&["S", "H", "S"]);

        g.player_turns(&mut deck, &dealer, &mut prompt);
        assert_eq!(g.player.hands[0].cards.len(), 2);
        assert_eq!(g.player.hands[1].cards.len(), 3);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn play_only_first_skips_later_hands() {
        let mut g = game(10);
        g.player.play_only_first = true;
        g.player.hands = vec![
            hand_of(10, &[Rank::King, Rank::Nine]),
            hand_of(10, &[Rank::Two, Rank::Three]),
        ];
        let mut deck = Deck::new_shuffled(&mut StdRng::seed_from_u64(10));
        let mut dealer = Dealer::new(17);
        dealer.hand = hand_of(0, &[Rank::Nine, Rank::Six]);
        let mut prompt = ScriptedPrompt::new(&["S"]);

        g.player_turns(&mut deck, &dealer, &mut prompt);
        assert!(!g.player.hands[0].active);
        assert!(g.player.hands[1].active);
    }

    #[test]
    fn declining_to_continue_ends_the_game() {
        let mut g = game(77);
        let mut prompt = ScriptedPrompt::new(&["1", "10", "S", "n"]);
        let final_balance = g.run(&mut prompt);
        assert!(prompt.was_asked("Play another round"));
        assert_eq!(prompt.remaining(), 0);
        assert!([490, 500, 510].contains(&final_balance));
    }

    #[test]
    fn answering_yes_starts_another_round() {
        let mut g = game(78);
        let mut prompt = ScriptedPrompt::new(&["1", "10", "S", "y", "1", "10", "S", "N"]);
        g.run(&mut prompt);
        assert_eq!(g.rounds, 2);
        assert_eq!(prompt.remaining(), 0);
    }
}
