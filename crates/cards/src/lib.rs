// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninecard playing cards types.
//!
//! This crate defines the card types used by the game and the scoring
//! engine:
//!
//! ```
//! # use ninecard_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.value(), 1);
//! assert_eq!(kd.value(), 10);
//! ```
//!
//! cards can also be parsed from their two characters form:
//!
//! ```
//! # use ninecard_cards::{Card, Rank, Suit};
//! let card = "TS".parse::<Card>().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use ninecard_cards::Deck;
//! let mut rng = rand::rng();
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let card = deck.deal();
//! assert_eq!(deck.len(), 51);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
