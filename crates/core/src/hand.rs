// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player hand.
use std::fmt;

use ninecard_cards::Card;
use ninecard_eval::{HandScore, Meld};

/// A player hand of cards.
///
/// A hand holds nine cards between turns and ten right after a draw. Cards
/// always come from a single deck so the hand never holds duplicates.
#[derive(Debug, Default, Clone)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes a card, returns false if the card is not in the hand.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(pos) = self.cards.iter().position(|c| *c == card) {
            self.cards.remove(pos);
            true
        } else {
            false
        }
    }

    /// Checks if the hand holds the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The hand cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The raw point total without removing melds.
    pub fn total(&self) -> u32 {
        self.cards.iter().map(Card::value).sum()
    }

    /// Scores the hand with the deadwood evaluator.
    pub fn score(&self) -> HandScore {
        HandScore::eval(&self.cards)
    }

    /// Scores the hand and returns the melds of an optimal partition.
    pub fn score_with_melds(&self) -> (HandScore, Vec<Meld>) {
        HandScore::eval_with_melds(&self.cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sort by suit and ordinal so logs show melds next to each other.
        let mut cards = self.cards.clone();
        cards.sort_by_key(|c| (c.suit().index(), c.ordinal()));

        for (idx, card) in cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &[&str]) -> Hand {
        s.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn remove_card() {
        let mut hand = hand(&["4D", "4C", "4S", "5S", "6S"]);
        assert!(hand.remove("4C".parse().unwrap()));
        assert!(!hand.remove("4C".parse().unwrap()));
        assert!(!hand.remove("KH".parse().unwrap()));
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn scores_with_the_evaluator() {
        let hand = hand(&["4D", "4C", "4S", "5S", "6S"]);
        assert_eq!(hand.total(), 23);
        assert_eq!(hand.score().deadwood(), 8);

        let (score, melds) = hand.score_with_melds();
        assert_eq!(score.deadwood(), 8);
        assert_eq!(melds.len(), 1);
    }

    #[test]
    fn display_sorts_by_suit_and_ordinal() {
        let hand = hand(&["6S", "4D", "TH", "4S", "2H"]);
        assert_eq!(hand.to_string(), "4D 2H TH 4S 6S");
    }
}
