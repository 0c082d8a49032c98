// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player decision policies.
use ninecard_cards::Card;

use crate::hand::Hand;

/// The table as seen by a strategy making a decision.
#[derive(Debug)]
pub struct TurnView<'a> {
    /// The deciding player hand.
    pub hand: &'a Hand,
    /// Cards left in the deck.
    pub deck_len: usize,
    /// The visible top card of the discard pile.
    pub pile_top: Option<Card>,
    /// Another player has knocked, this is the last turn cycle.
    pub anyone_knocked: bool,
    /// The turn number within the round, starting at zero.
    pub turn: usize,
}

/// A player decision policy.
///
/// The round engine consults the policy up to three times per turn: whether
/// to knock, where to draw from, and which card to discard. A policy only
/// sees a [TurnView] snapshot, it cannot touch game state.
pub trait Strategy {
    /// Decides whether to knock and end the round.
    ///
    /// Never consulted once another player has knocked, the engine allows a
    /// single knocker per round.
    fn should_knock(&mut self, view: &TurnView<'_>) -> bool;

    /// Decides whether to draw the visible pile card instead of a covered
    /// deck card. Not consulted when the pile is empty.
    fn draws_from_pile(&mut self, view: &TurnView<'_>) -> bool;

    /// Picks the card to discard from a ten card hand.
    ///
    /// Returning a card that is not in the hand is a policy bug and fails
    /// the round.
    fn pick_discard(&mut self, view: &TurnView<'_>) -> Card;
}
