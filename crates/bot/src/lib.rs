// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninecard bot strategies.
//!
//! Built in [Strategy] implementations for simulations. The main one is
//! [CutoffStrategy] which knocks when its deadwood falls below a cutoff,
//! draws according to a [DrawRule], and discards the highest value card
//! that no optimal meld needs.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use rand::{Rng, rngs::StdRng};

use ninecard_core::{
    Card,
    strategy::{Strategy, TurnView},
};

/// When to take the visible pile card over a covered deck card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRule {
    /// Never draw from the pile.
    Never,
    /// Always draw from the pile when it has a card.
    Always,
    /// Draw only when the pile card extends a run or pairs toward a set.
    IfCompletes,
}

/// A knock at cutoff strategy.
///
/// Knocks as soon as its deadwood falls below the cutoff, draws according
/// to the configured [DrawRule], and discards the highest value card left
/// out of an optimal meld partition, breaking ties at random.
pub struct CutoffStrategy {
    cutoff: u32,
    draw_rule: DrawRule,
    rng: StdRng,
}

impl CutoffStrategy {
    /// Creates a strategy knocking below `cutoff` with the given draw rule.
    pub fn new(cutoff: u32, draw_rule: DrawRule, rng: StdRng) -> Self {
        Self {
            cutoff,
            draw_rule,
            rng,
        }
    }
}

impl Strategy for CutoffStrategy {
    fn should_knock(&mut self, view: &TurnView<'_>) -> bool {
        !view.anyone_knocked && view.hand.score().deadwood() < self.cutoff
    }

    fn draws_from_pile(&mut self, view: &TurnView<'_>) -> bool {
        let Some(card) = view.pile_top else {
            return false;
        };

        match self.draw_rule {
            DrawRule::Never => false,
            DrawRule::Always => true,
            DrawRule::IfCompletes => completes_meld(view.hand.cards(), card),
        }
    }

    fn pick_discard(&mut self, view: &TurnView<'_>) -> Card {
        let (_, melds) = view.hand.score_with_melds();
        let melded = melds
            .iter()
            .flat_map(|meld| meld.cards())
            .copied()
            .collect::<Vec<_>>();

        let deadwood = view
            .hand
            .cards()
            .iter()
            .filter(|card| !melded.contains(card))
            .copied()
            .collect::<Vec<_>>();

        // With a fully melded hand any discard costs the same, fall back
        // to the whole hand and let the tie break pick one.
        let pool = if deadwood.is_empty() {
            view.hand.cards().to_vec()
        } else {
            deadwood
        };

        let highest = pool.iter().map(Card::value).max().unwrap_or(0);
        let ties = pool
            .iter()
            .filter(|card| card.value() == highest)
            .copied()
            .collect::<Vec<_>>();

        ties[self.rng.random_range(0..ties.len())]
    }
}

/// Checks if a card would extend a run or pair toward a set in the hand.
pub fn completes_meld(cards: &[Card], card: Card) -> bool {
    // Two same suit neighbors below, around, or above the card make it the
    // third card of a run.
    let ordinal = i16::from(card.ordinal());
    let suited = cards
        .iter()
        .filter(|c| c.suit() == card.suit())
        .map(|c| i16::from(c.ordinal()))
        .collect::<Vec<_>>();

    let neighbors = [
        [ordinal - 2, ordinal - 1],
        [ordinal - 1, ordinal + 1],
        [ordinal + 1, ordinal + 2],
    ];

    if neighbors
        .iter()
        .any(|pair| pair.iter().all(|o| suited.contains(o)))
    {
        return true;
    }

    // Two cards of the same rank pair toward a set.
    cards.iter().filter(|c| c.rank() == card.rank()).count() >= 2
}
