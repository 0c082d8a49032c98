// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninecard game core types.
//!
//! This crate implements the Nine Card game around the deadwood scoring
//! engine: hands and the discard pile, the [Strategy](strategy::Strategy)
//! decision policy players plug in, a single [Round](round::Round) driven
//! as a state machine, and the multi round [Game](game::Game) loop played
//! to a target score.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod game;
pub mod hand;
pub mod pile;
pub mod player;
pub mod round;
pub mod strategy;

// Reexport cards types.
pub use ninecard_cards::{Card, Deck, Rank, Suit};
