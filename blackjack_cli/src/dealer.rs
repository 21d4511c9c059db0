use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;

#[derive(Clone, Debug)]
pub struct Dealer {
    pub hand: Hand,
    stands_on: u32,
}

impl Dealer {
    pub fn new(stands_on: u32) -> Self {
        Self { hand: Hand::new(0), stands_on }
    }

    pub fn should_hit(&self) -> bool {
        self.hand.score() < self.stands_on
    }

    /// Draw one card if the house rule asks for it. Returns the card drawn, or `None`
    /// once the dealer stands or the deck runs dry.
    pub fn draw(&mut self, deck: &mut Deck) -> Option<Card> {
        if !self.should_hit() {
            return None;
        }
        let Some(card) = deck.deal() else {
            tracing::warn!(score = self.hand.score(), "deck exhausted during dealer turn");
            return None;
        };
        self.hand.add(card);
        Some(card)
    }
}
