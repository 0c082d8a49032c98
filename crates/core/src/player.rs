// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game players.
use std::fmt;

use crate::{hand::Hand, strategy::Strategy};

/// A game player.
///
/// A player owns a hand, a cumulative score across rounds, and the
/// [Strategy] that makes its decisions.
pub struct Player {
    /// The player name.
    pub name: String,
    /// The player hand.
    pub hand: Hand,
    /// The player has knocked in the current round.
    pub knocked: bool,
    pub(crate) strategy: Box<dyn Strategy>,
    scores: Vec<i32>,
}

impl Player {
    /// Creates a player with the given decision strategy.
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::default(),
            knocked: false,
            strategy,
            scores: vec![0],
        }
    }

    /// The player cumulative score.
    pub fn score(&self) -> i32 {
        self.scores.last().copied().unwrap_or(0)
    }

    /// The player score after each settled round, starting at zero.
    pub fn score_history(&self) -> &[i32] {
        &self.scores
    }

    /// Applies a settled round delta to the cumulative score.
    pub(crate) fn update_score(&mut self, delta: i32) {
        self.scores.push(self.score() + delta);
    }

    /// Drops the hand and knock state for a new round.
    pub(crate) fn reset_hand(&mut self) {
        self.hand = Hand::default();
        self.knocked = false;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("knocked", &self.knocked)
            .field("scores", &self.scores)
            .finish()
    }
}
