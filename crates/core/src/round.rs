// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A single round of play.
use log::{debug, info};
use serde::{Deserialize, Serialize};

use ninecard_cards::Deck;

use crate::{game::GameError, pile::Pile, player::Player, strategy::TurnView};

/// The round state.
///
/// Transitions are driven by discrete events: a knock, the deck running
/// out, and the turn cycle coming back around to the knocker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Deal nine cards to each player.
    Dealing,
    /// Rotate turns until a knock or the deck runs out.
    Turns,
    /// Score every hand with the deadwood evaluator.
    Scoring,
    /// Apply the pairwise score deltas against the knocker.
    Settlement,
    /// The round is over.
    Complete,
}

/// The outcome of a settled round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The seat of the player who ended the round.
    pub knocker: usize,
    /// The deadwood scored by each seat.
    pub deadwood: Vec<u32>,
    /// The score delta applied to each seat.
    pub deltas: Vec<i32>,
}

/// A single round of Nine Card.
///
/// A round deals nine cards to each player and rotates turns starting at
/// the player after the dealer. On a turn a player may knock to end the
/// round, otherwise they draw from the deck or the pile and discard. The
/// round also ends when the deck runs out, with the last player to act
/// taking the knocker role for settlement.
pub struct Round<'a> {
    players: &'a mut [Player],
    dealer: usize,
    deck: Deck,
    pile: Pile,
    state: RoundState,
    turn: usize,
    knocker: Option<usize>,
}

impl<'a> Round<'a> {
    /// The number of cards dealt to each player.
    pub const HAND_SIZE: usize = 9;

    /// The current round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Creates a round for the given players and dealer seat.
    pub fn new(players: &'a mut [Player], dealer: usize, deck: Deck) -> Self {
        Self {
            players,
            dealer,
            deck,
            pile: Pile::default(),
            state: RoundState::Dealing,
            turn: 0,
            knocker: None,
        }
    }

    /// Plays the round to completion and settles the scores.
    pub fn play(mut self) -> Result<RoundOutcome, GameError> {
        self.enter_dealing();
        let knocker = self.enter_turns()?;
        let deadwood = self.enter_scoring();
        Ok(self.enter_settlement(knocker, deadwood))
    }

    /// Deals a fresh hand to each player.
    fn enter_dealing(&mut self) {
        self.state = RoundState::Dealing;

        for player in self.players.iter_mut() {
            player.reset_hand();
            for _ in 0..Self::HAND_SIZE {
                player.hand.push(self.deck.deal());
            }
            debug!("{} dealt {}", player.name, player.hand);
        }
    }

    /// Rotates turns until a knock cycle completes or the deck runs out,
    /// returns the knocker seat.
    fn enter_turns(&mut self) -> Result<usize, GameError> {
        self.state = RoundState::Turns;

        let seats = self.players.len();
        let mut seat = (self.dealer + 1) % seats;

        loop {
            if self.knocker == Some(seat) {
                // The turn cycle came back around to the knocker.
                break;
            }

            self.take_turn(seat)?;

            if self.deck.is_empty() {
                // The deck running out ends the round at once; the last
                // player to act knocks if nobody has.
                if self.knocker.is_none() {
                    self.players[seat].knocked = true;
                    self.knocker = Some(seat);
                    info!("Deck is empty, {} ends the round", self.players[seat].name);
                }
                break;
            }

            self.turn += 1;
            seat = (seat + 1) % seats;
        }

        Ok(self.knocker.expect("turn cycle ends with a knocker"))
    }

    /// Plays one turn for the given seat.
    fn take_turn(&mut self, seat: usize) -> Result<(), GameError> {
        let deck_len = self.deck.len();
        let pile_top = self.pile.top();
        let anyone_knocked = self.knocker.is_some();
        let turn = self.turn;

        let player = &mut self.players[seat];

        let view = TurnView {
            hand: &player.hand,
            deck_len,
            pile_top,
            anyone_knocked,
            turn,
        };

        // Only one knocker per round, once somebody knocked the remaining
        // players just play out the cycle.
        if !anyone_knocked && player.strategy.should_knock(&view) {
            player.knocked = true;
            self.knocker = Some(seat);
            info!(
                "{} knocks with {} deadwood",
                player.name,
                player.hand.score().deadwood()
            );
            return Ok(());
        }

        let draws_pile = pile_top.is_some() && player.strategy.draws_from_pile(&view);
        let card = if draws_pile {
            self.pile.take().expect("pile has a visible card")
        } else {
            self.deck.deal()
        };

        if draws_pile {
            debug!("{} draws {card} from the pile", player.name);
        } else {
            debug!("{} draws {card} from the deck", player.name);
        }

        player.hand.push(card);

        let view = TurnView {
            hand: &player.hand,
            deck_len: self.deck.len(),
            pile_top: self.pile.top(),
            anyone_knocked,
            turn,
        };

        let discard = player.strategy.pick_discard(&view);
        if !player.hand.remove(discard) {
            return Err(GameError::NotInHand {
                name: player.name.clone(),
                card: discard,
            });
        }

        debug!("{} discards {discard}", player.name);
        self.pile.push(discard);

        Ok(())
    }

    /// Scores every hand once with the deadwood evaluator.
    fn enter_scoring(&mut self) -> Vec<u32> {
        self.state = RoundState::Scoring;

        self.players
            .iter()
            .map(|player| {
                let deadwood = player.hand.score().deadwood();
                info!("{} scores {deadwood} with {}", player.name, player.hand);
                deadwood
            })
            .collect()
    }

    /// Applies the pairwise deltas against the knocker: for every other
    /// player the knocker gains their deadwood minus its own, and they gain
    /// the opposite.
    fn enter_settlement(&mut self, knocker: usize, deadwood: Vec<u32>) -> RoundOutcome {
        self.state = RoundState::Settlement;

        let knocker_deadwood = deadwood[knocker] as i32;
        let mut deltas = vec![0i32; self.players.len()];

        for (seat, dw) in deadwood.iter().enumerate() {
            if seat != knocker {
                deltas[knocker] += *dw as i32 - knocker_deadwood;
                deltas[seat] = knocker_deadwood - *dw as i32;
            }
        }

        for (player, delta) in self.players.iter_mut().zip(&deltas) {
            player.update_score(*delta);
        }

        self.state = RoundState::Complete;

        RoundOutcome {
            knocker,
            deadwood,
            deltas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;
    use ninecard_cards::Card;
    use rand::{SeedableRng, rngs::StdRng};

    /// Knocks from the given turn on, never draws from the pile, and
    /// discards its highest value card.
    struct Script {
        knock_at: Option<usize>,
    }

    impl Strategy for Script {
        fn should_knock(&mut self, view: &TurnView<'_>) -> bool {
            self.knock_at.is_some_and(|turn| view.turn >= turn)
        }

        fn draws_from_pile(&mut self, _view: &TurnView<'_>) -> bool {
            false
        }

        fn pick_discard(&mut self, view: &TurnView<'_>) -> Card {
            let mut cards = view.hand.cards().to_vec();
            cards.sort_by_key(|c| c.value());
            cards[cards.len() - 1]
        }
    }

    fn players(scripts: Vec<Script>) -> Vec<Player> {
        scripts
            .into_iter()
            .enumerate()
            .map(|(seat, script)| Player::new(format!("P{seat}"), Box::new(script)))
            .collect()
    }

    fn deck(seed: u64) -> Deck {
        Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn knock_ends_after_one_cycle() {
        let mut players = players(vec![
            Script { knock_at: Some(0) },
            Script { knock_at: None },
            Script { knock_at: None },
        ]);

        let outcome = Round::new(&mut players, 1, deck(1)).play().unwrap();

        // The player after the dealer acts first and knocks at once.
        assert_eq!(outcome.knocker, 2);
        assert!(players[2].knocked);
        assert!(!players[0].knocked);
        assert!(!players[1].knocked);

        // Everyone still holds nine cards after the round.
        assert!(players.iter().all(|p| p.hand.len() == Round::HAND_SIZE));

        // Settlement is zero sum and lands on the cumulative scores.
        assert_eq!(outcome.deltas.iter().sum::<i32>(), 0);
        for (player, delta) in players.iter().zip(&outcome.deltas) {
            assert_eq!(player.score(), *delta);
            assert_eq!(player.score_history(), &[0, *delta]);
        }
    }

    #[test]
    fn only_one_player_knocks() {
        let mut players = players(vec![
            Script { knock_at: Some(0) },
            Script { knock_at: Some(0) },
            Script { knock_at: Some(0) },
        ]);

        let outcome = Round::new(&mut players, 0, deck(2)).play().unwrap();

        assert_eq!(outcome.knocker, 1);
        assert_eq!(players.iter().filter(|p| p.knocked).count(), 1);
    }

    #[test]
    fn settlement_deltas_follow_deadwood() {
        let mut players = players(vec![
            Script { knock_at: Some(2) },
            Script { knock_at: None },
            Script { knock_at: None },
        ]);

        let outcome = Round::new(&mut players, 0, deck(3)).play().unwrap();

        let deadwood = outcome
            .deadwood
            .iter()
            .map(|dw| *dw as i32)
            .collect::<Vec<_>>();
        let knocker = outcome.knocker;

        for seat in 0..deadwood.len() {
            if seat == knocker {
                let expected = deadwood
                    .iter()
                    .enumerate()
                    .filter(|(s, _)| *s != knocker)
                    .map(|(_, dw)| dw - deadwood[knocker])
                    .sum::<i32>();
                assert_eq!(outcome.deltas[seat], expected);
            } else {
                assert_eq!(outcome.deltas[seat], deadwood[knocker] - deadwood[seat]);
            }
        }
    }

    #[test]
    fn deck_exhaustion_ends_the_round() {
        let mut players = players(vec![
            Script { knock_at: None },
            Script { knock_at: None },
        ]);

        let mut round = Round::new(&mut players, 0, deck(4));
        assert_eq!(round.state(), RoundState::Dealing);

        round.enter_dealing();
        let knocker = round.enter_turns().unwrap();
        assert_eq!(round.state(), RoundState::Turns);

        // Two players draw 18 cards at the deal, every turn takes one deck
        // card, so the deck empties after 34 turns; seats alternate from
        // seat one so the last turn lands on seat zero.
        assert!(round.deck.is_empty());
        assert_eq!(round.pile.len(), 34);
        assert_eq!(knocker, 0);
        assert!(round.players[0].knocked);

        // All dealt cards are in hands or on the pile.
        let held = round.players.iter().map(|p| p.hand.len()).sum::<usize>();
        assert_eq!(held + round.pile.len(), Deck::SIZE);
    }

    #[test]
    fn scoring_matches_hand_evaluation() {
        let mut players = players(vec![
            Script { knock_at: Some(1) },
            Script { knock_at: None },
        ]);

        let outcome = Round::new(&mut players, 0, deck(5)).play().unwrap();

        for (player, deadwood) in players.iter().zip(&outcome.deadwood) {
            assert_eq!(player.hand.score().deadwood(), *deadwood);
        }
    }
}
