// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical per-suit layout of a hand.
use ninecard_cards::{Card, Suit};

/// Per-suit remaining card counts, the state of the meld search.
pub(crate) type State = [u8; Suit::COUNT];

/// A hand laid out for the meld search.
///
/// Cards are grouped by suit in the fixed suit order, each group sorted by
/// ascending rank ordinal. A suit's remaining window is addressed only by
/// its count: the window is always a prefix of the sorted group, so the top
/// card is the highest unprocessed ordinal of that suit. Melds and discards
/// always take from the top, which is what lets a count tuple identify the
/// remaining cards exactly.
#[derive(Debug)]
pub(crate) struct Canonical {
    ordered: Vec<Card>,
    starts: [usize; Suit::COUNT],
    counts: State,
}

impl Canonical {
    /// Lays out the given cards by suit and ascending ordinal.
    pub(crate) fn new(cards: &[Card]) -> Self {
        let mut ordered = cards.to_vec();
        ordered.sort_by_key(|c| (c.suit().index(), c.ordinal()));

        let mut counts = [0u8; Suit::COUNT];
        for card in &ordered {
            counts[card.suit().index()] += 1;
        }

        let mut starts = [0usize; Suit::COUNT];
        let mut start = 0;
        for suit in Suit::suits() {
            starts[suit.index()] = start;
            start += counts[suit.index()] as usize;
        }

        Self {
            ordered,
            starts,
            counts,
        }
    }

    /// The initial state with every card still in its suit window.
    pub(crate) fn counts(&self) -> State {
        self.counts
    }

    /// The top card of suit `s` at the given state, if any remains.
    pub(crate) fn top(&self, state: &State, s: usize) -> Option<Card> {
        (state[s] > 0).then(|| self.card(s, state[s] - 1))
    }

    /// The card at position `pos` from the bottom of the suit `s` group.
    pub(crate) fn card(&self, s: usize, pos: u8) -> Card {
        self.ordered[self.starts[s] + pos as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &[&str]) -> Vec<Card> {
        s.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn suit_windows() {
        let canonical = Canonical::new(&cards(&["6S", "4D", "4C", "5S", "4S"]));
        assert_eq!(canonical.counts(), [1, 1, 0, 3]);

        let state = canonical.counts();
        assert_eq!(canonical.top(&state, 0), Some("4C".parse().unwrap()));
        assert_eq!(canonical.top(&state, 1), Some("4D".parse().unwrap()));
        assert_eq!(canonical.top(&state, 2), None);
        assert_eq!(canonical.top(&state, 3), Some("6S".parse().unwrap()));

        // Taking a card from the top moves the window down the ordinals.
        let state = [1, 1, 0, 2];
        assert_eq!(canonical.top(&state, 3), Some("5S".parse().unwrap()));
    }
}
