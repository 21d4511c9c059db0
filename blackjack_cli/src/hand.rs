use crate::card::{Card, Rank};

pub const BLACKJACK: u32 = 21;

#[derive(Clone, Debug)]
pub struct Hand {
    pub cards: Vec<Card>, // deal order
    wager: u32,
    pub active: bool,
}

impl Hand {
    pub fn new(wager: u32) -> Self {
        Self { cards: Vec::with_capacity(4), wager, active: true }
    }

    pub fn add(&mut self, c: Card) { self.cards.push(c); }

    pub fn wager(&self) -> u32 { self.wager }

    /// Sum of card values with Aces counted as 11, each demoted to 1 while the total is over 21.
    pub fn score(&self) -> u32 {
        let mut total: u32 = self.cards.iter().map(|c| c.rank.value()).sum();
        let mut aces = self.cards.iter().filter(|c| c.rank == Rank::Ace).count();
        while total > BLACKJACK && aces > 0 {
            total -= 10;
            aces -= 1;
        }
        total
    }

    pub fn is_bust(&self) -> bool { self.score() > BLACKJACK }

    /// The dealer's up card, i.e. the second one dealt.
    pub fn up_card(&self) -> Option<&Card> { self.cards.get(1) }

    pub fn fmt_inline(&self) -> String {
        self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
    }
}
