// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A simple custom bot strategy.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};

use ninecard_bot::{CutoffStrategy, DrawRule};
use ninecard_core::{
    Card,
    game::Game,
    player::Player,
    strategy::{Strategy, TurnView},
};

/// Knocks only on a gin hand, always draws the visible pile card.
struct GinOnly;

impl Strategy for GinOnly {
    fn should_knock(&mut self, view: &TurnView<'_>) -> bool {
        view.hand.score().deadwood() == 0
    }

    fn draws_from_pile(&mut self, _view: &TurnView<'_>) -> bool {
        true
    }

    fn pick_discard(&mut self, view: &TurnView<'_>) -> Card {
        let mut cards = view.hand.cards().to_vec();
        cards.sort_by_key(|c| c.value());
        cards[cards.len() - 1]
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let players = vec![
        Player::new("Gin", Box::new(GinOnly)),
        Player::new(
            "Cutoff",
            Box::new(CutoffStrategy::new(
                10,
                DrawRule::IfCompletes,
                StdRng::seed_from_u64(1),
            )),
        ),
    ];

    let mut game = Game::with_rng(players, 50, StdRng::seed_from_u64(7))?;
    let outcome = game.play()?;

    println!(
        "{} wins with scores {:?} after {} rounds",
        game.players()[outcome.winner].name,
        outcome.scores,
        outcome.rounds
    );

    Ok(())
}
