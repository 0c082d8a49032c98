// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninecard deadwood hand evaluator.
//!
//! Evaluates a Nine Card hand by finding the partition into disjoint melds,
//! runs and sets, that removes the most points from the hand; the points
//! left over are the hand deadwood score, the lower the better.
//!
//! A card may belong to several competing melds, the optimal assignment is
//! global: with `4D 4C 4S 5S 6S` taking the `4S 5S 6S` run and forfeiting
//! the two fours beats keeping the three of a kind:
//!
//! ```
//! # use ninecard_eval::*;
//! let cards = ["4D", "4C", "4S", "5S", "6S"]
//!     .iter()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let score = HandScore::eval(&cards);
//! assert_eq!(score.melded(), 15);
//! assert_eq!(score.deadwood(), 8);
//! ```
//!
//! To get the chosen melds use [HandScore::eval_with_melds], useful for
//! display and for discard heuristics that protect melded cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod canonical;
pub mod score;
pub use score::{HandScore, Meld, MeldKind};

// Reexport cards types.
pub use ninecard_cards::{Card, Deck, Rank, Suit};
