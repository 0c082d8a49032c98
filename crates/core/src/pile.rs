// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The discard pile.
use ninecard_cards::Card;

/// The discard pile.
///
/// Starts empty; every turn adds one card, the top card is visible to all
/// players and can be drawn instead of a covered deck card.
#[derive(Debug, Default)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// The visible top card, if any.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Removes and returns the top card.
    pub fn take(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Adds a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The number of cards in the pile.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the pile is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_take_push() {
        let mut pile = Pile::default();
        assert!(pile.is_empty());
        assert_eq!(pile.top(), None);
        assert_eq!(pile.take(), None);

        let c1 = "4D".parse().unwrap();
        let c2 = "KH".parse().unwrap();
        pile.push(c1);
        pile.push(c2);

        assert_eq!(pile.top(), Some(c2));
        assert_eq!(pile.take(), Some(c2));
        assert_eq!(pile.top(), Some(c1));
        assert_eq!(pile.len(), 1);
    }
}
