// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The multi round game loop.
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ninecard_cards::{Card, Deck};

use crate::{
    player::Player,
    round::{Round, RoundOutcome},
};

/// Errors from the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Fewer than two players.
    #[error("a game needs at least {} players", Game::MIN_PLAYERS)]
    TooFewPlayers,
    /// More than three players.
    #[error("a game seats at most {} players", Game::MAX_PLAYERS)]
    TooManyPlayers,
    /// A strategy discarded a card its player does not hold.
    #[error("{name} discarded {card} which is not in the hand")]
    NotInHand {
        /// The offending player name.
        name: String,
        /// The discarded card.
        card: Card,
    },
}

/// The result of a completed game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The winner seat.
    pub winner: usize,
    /// The final score of each seat.
    pub scores: Vec<i32>,
    /// The number of rounds played.
    pub rounds: usize,
}

/// A Nine Card game played to a target score.
///
/// Rounds are played with the dealer rotating left until a player reaches
/// the target cumulative score.
pub struct Game {
    players: Vec<Player>,
    target: i32,
    dealer: usize,
    rounds: usize,
    rng: StdRng,
}

impl Game {
    /// The minimum number of players.
    pub const MIN_PLAYERS: usize = 2;
    /// The maximum number of players.
    pub const MAX_PLAYERS: usize = 3;

    /// Creates a game with OS seeded randomness.
    pub fn new(players: Vec<Player>, target: i32) -> Result<Self, GameError> {
        Self::with_rng(players, target, StdRng::from_os_rng())
    }

    /// Creates a game with caller seeded randomness.
    pub fn with_rng(players: Vec<Player>, target: i32, rng: StdRng) -> Result<Self, GameError> {
        if players.len() < Self::MIN_PLAYERS {
            return Err(GameError::TooFewPlayers);
        }

        if players.len() > Self::MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        Ok(Self {
            players,
            target,
            dealer: 0,
            rounds: 0,
            rng,
        })
    }

    /// Plays rounds until a player reaches the target score.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        info!("New game to {} points", self.target);

        while self.players.iter().all(|p| p.score() < self.target) {
            self.play_round()?;
        }

        let scores = self.players.iter().map(Player::score).collect::<Vec<_>>();
        let winner = scores
            .iter()
            .enumerate()
            .max_by_key(|(_, score)| **score)
            .map(|(seat, _)| seat)
            .expect("games have players");

        info!(
            "{} wins with {} points after {} rounds",
            self.players[winner].name, scores[winner], self.rounds
        );

        Ok(GameOutcome {
            winner,
            scores,
            rounds: self.rounds,
        })
    }

    /// Plays a single round rotating the dealer.
    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        info!(
            "Round {}: {} deals",
            self.rounds + 1,
            self.players[self.dealer].name
        );

        let deck = Deck::new_and_shuffled(&mut self.rng);
        let outcome = Round::new(&mut self.players, self.dealer, deck).play()?;

        self.dealer = (self.dealer + 1) % self.players.len();
        self.rounds += 1;

        Ok(outcome)
    }

    /// The game players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Strategy, TurnView};

    /// Knocks as soon as allowed and discards the first card.
    struct Knocker;

    impl Strategy for Knocker {
        fn should_knock(&mut self, _view: &TurnView<'_>) -> bool {
            true
        }

        fn draws_from_pile(&mut self, _view: &TurnView<'_>) -> bool {
            false
        }

        fn pick_discard(&mut self, view: &TurnView<'_>) -> Card {
            view.hand.cards()[0]
        }
    }

    fn players(count: usize) -> Vec<Player> {
        (0..count)
            .map(|seat| Player::new(format!("P{seat}"), Box::new(Knocker)))
            .collect()
    }

    #[test]
    fn rejects_wrong_player_counts() {
        assert_eq!(
            Game::new(players(1), 50).err(),
            Some(GameError::TooFewPlayers)
        );
        assert_eq!(
            Game::new(players(4), 50).err(),
            Some(GameError::TooManyPlayers)
        );
    }

    #[test]
    fn plays_to_the_target_score() {
        let rng = StdRng::seed_from_u64(17);
        let mut game = Game::with_rng(players(3), 30, rng).unwrap();

        let outcome = game.play().unwrap();

        assert!(outcome.scores[outcome.winner] >= 30);
        assert_eq!(
            outcome.scores[outcome.winner],
            *outcome.scores.iter().max().unwrap()
        );

        // Settlements are zero sum across the whole game.
        assert_eq!(outcome.scores.iter().sum::<i32>(), 0);

        // Every player saw one score entry per round.
        for player in game.players() {
            assert_eq!(player.score_history().len(), outcome.rounds + 1);
        }
    }

    #[test]
    fn dealer_rotates_every_round() {
        let rng = StdRng::seed_from_u64(23);
        let mut game = Game::with_rng(players(2), 1000, rng).unwrap();

        assert_eq!(game.dealer, 0);
        game.play_round().unwrap();
        assert_eq!(game.dealer, 1);
        game.play_round().unwrap();
        assert_eq!(game.dealer, 0);
        assert_eq!(game.rounds, 2);
    }
}
