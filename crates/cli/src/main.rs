// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ninecard simulation CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};

use ninecard_bot::{CutoffStrategy, DrawRule};
use ninecard_core::{game::Game, player::Player};

static NICKNAMES: &[&str] = &["Alice", "Bob", "Carol"];

/// The draw rule played by a seat.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DrawArg {
    /// Never draw from the pile.
    Never,
    /// Always draw from the pile.
    Always,
    /// Draw when the pile card completes a meld.
    Completes,
}

impl From<DrawArg> for DrawRule {
    fn from(arg: DrawArg) -> Self {
        match arg {
            DrawArg::Never => DrawRule::Never,
            DrawArg::Always => DrawRule::Always,
            DrawArg::Completes => DrawRule::IfCompletes,
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Draw rule for each seat, one entry per player.
    #[clap(
        long,
        short,
        value_enum,
        num_args = 2..=3,
        default_values = ["completes", "always"]
    )]
    players: Vec<DrawArg>,
    /// Knock when deadwood falls below this cutoff.
    #[clap(long, short, default_value_t = 10)]
    cutoff: u32,
    /// Target score that ends a game.
    #[clap(long, short, default_value_t = 50)]
    target: i32,
    /// Number of games to play.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    games: u32,
    /// Seed for reproducible games.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Log rounds and turns.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_target(false)
        .init();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let seats = cli.players.len();
    let mut wins = vec![0u32; seats];
    let mut totals = vec![0i64; seats];
    let mut rounds = 0usize;

    for _ in 0..cli.games {
        let players = cli
            .players
            .iter()
            .enumerate()
            .map(|(seat, rule)| {
                let strategy = CutoffStrategy::new(
                    cli.cutoff,
                    (*rule).into(),
                    StdRng::seed_from_u64(rng.random()),
                );
                Player::new(NICKNAMES[seat], Box::new(strategy))
            })
            .collect();

        let mut game = Game::with_rng(players, cli.target, StdRng::seed_from_u64(rng.random()))?;
        let outcome = game.play()?;

        wins[outcome.winner] += 1;
        rounds += outcome.rounds;
        for (total, score) in totals.iter_mut().zip(&outcome.scores) {
            *total += i64::from(*score);
        }
    }

    println!("Games:  {}", cli.games);
    println!("Rounds: {rounds}\n");

    println!(
        "{:<10}{:>8}{:>8}{:>12}",
        "Player", "Wins", "Win %", "Avg score"
    );
    for seat in 0..seats {
        println!(
            "{:<10}{:>8}{:>7.1}%{:>12.1}",
            NICKNAMES[seat],
            wins[seat],
            f64::from(wins[seat]) / f64::from(cli.games) * 100.0,
            totals[seat] as f64 / f64::from(cli.games),
        );
    }

    Ok(())
}
