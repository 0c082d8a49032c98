// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deadwood hand scoring.
//!
//! The scorer finds the partition of a hand into disjoint melds, runs and
//! sets, that removes the most points; the leftover points are the hand
//! deadwood. The search runs over canonical per-suit windows where every
//! meld and discard takes cards from the top of a window, so a state is
//! fully identified by the four remaining counts and can be memoized.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use ninecard_cards::{Card, Suit};

use crate::canonical::{Canonical, State};

/// The kind of a meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldKind {
    /// Three or more cards of one suit with consecutive rank ordinals.
    Run,
    /// Three or four cards of the same rank across distinct suits.
    Set,
}

/// A group of cards removed from deadwood scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    kind: MeldKind,
    cards: Vec<Card>,
}

impl Meld {
    fn run(cards: Vec<Card>) -> Self {
        Self {
            kind: MeldKind::Run,
            cards,
        }
    }

    fn set(cards: Vec<Card>) -> Self {
        Self {
            kind: MeldKind::Set,
            cards,
        }
    }

    /// The meld kind.
    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    /// The meld cards, runs are in ascending ordinal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The point value this meld removes from deadwood.
    pub fn value(&self) -> u32 {
        self.cards.iter().map(Card::value).sum()
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// A hand deadwood evaluation.
///
/// Use [HandScore::eval] to score a hand:
///
/// ```
/// # use ninecard_eval::*;
/// let cards = ["7S", "7H", "7D", "2C", "9D"]
///     .iter()
///     .map(|s| s.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
///
/// let score = HandScore::eval(&cards);
/// assert_eq!(score.total(), 32);
/// assert_eq!(score.melded(), 21);
/// assert_eq!(score.deadwood(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandScore {
    total: u32,
    melded: u32,
}

impl HandScore {
    /// Evaluates a hand.
    ///
    /// The hand must have 1 to 13 unique cards; hands always come from a
    /// deck that cannot repeat a card so uniqueness is not re-validated,
    /// passing duplicates mis-scores the hand.
    pub fn eval(cards: &[Card]) -> HandScore {
        let canonical = Self::canonicalize(cards);
        let mut search = Search::new(&canonical);
        let melded = search.best(canonical.counts());

        HandScore {
            total: cards.iter().map(Card::value).sum(),
            melded,
        }
    }

    /// Evaluates a hand and returns the melds of an optimal partition.
    ///
    /// The melds are rebuilt by walking the best transition recorded for
    /// each state during the search, the search is not run again. Ties
    /// between equal value partitions are broken arbitrarily, the score
    /// never changes.
    pub fn eval_with_melds(cards: &[Card]) -> (HandScore, Vec<Meld>) {
        let canonical = Self::canonicalize(cards);
        let mut search = Search::new(&canonical);
        let melded = search.best(canonical.counts());

        let score = HandScore {
            total: cards.iter().map(Card::value).sum(),
            melded,
        };

        (score, search.melds(canonical.counts()))
    }

    /// The raw hand total before removing melds.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// The maximum point value removable via melds.
    pub fn melded(&self) -> u32 {
        self.melded
    }

    /// The hand deadwood, the points left after removing the melds.
    pub fn deadwood(&self) -> u32 {
        self.total - self.melded
    }

    fn canonicalize(cards: &[Card]) -> Canonical {
        debug_assert!((1..=13).contains(&cards.len()));
        debug_assert!(
            cards
                .iter()
                .all(|c| cards.iter().filter(|o| *o == c).count() == 1),
            "duplicate cards in hand"
        );

        Canonical::new(cards)
    }
}

/// The transition that produced the best value for a state.
#[derive(Debug, Clone)]
struct Step {
    next: State,
    meld: Option<Meld>,
}

#[derive(Debug, Clone)]
struct Entry {
    value: u32,
    step: Option<Step>,
}

/// Memoized search for the maximum meldable value of a hand.
///
/// The memo table lives for a single evaluation, concurrent evaluations of
/// different hands share nothing.
struct Search<'a> {
    canonical: &'a Canonical,
    memo: AHashMap<State, Entry>,
}

impl<'a> Search<'a> {
    fn new(canonical: &'a Canonical) -> Self {
        Self {
            canonical,
            memo: AHashMap::default(),
        }
    }

    /// The maximum point value removable via melds from `state`.
    fn best(&mut self, state: State) -> u32 {
        if state.iter().all(|&count| count == 0) {
            return 0;
        }

        if let Some(entry) = self.memo.get(&state) {
            return entry.value;
        }

        // Ties keep the first candidate found, any optimal partition has
        // the same value.
        let mut best = Entry {
            value: 0,
            step: None,
        };

        // Leave out the top card of each suit in turn, it cannot be melded
        // from this state.
        for s in 0..Suit::COUNT {
            if state[s] > 0 {
                let mut next = state;
                next[s] -= 1;

                let value = self.best(next);
                if value > best.value {
                    best = Entry {
                        value,
                        step: Some(Step { next, meld: None }),
                    };
                }
            }
        }

        self.best_sets(state, &mut best);
        self.best_runs(state, &mut best);

        let value = best.value;
        self.memo.insert(state, best);
        value
    }

    /// Melds the top cards into a set, excluding one suit at a time for a
    /// three of a kind, or none for a four of a kind.
    fn best_sets(&mut self, state: State, best: &mut Entry) {
        let tops: [Option<Card>; Suit::COUNT] =
            std::array::from_fn(|s| self.canonical.top(&state, s));

        for excluded in 0..=Suit::COUNT {
            let mut cards = Vec::with_capacity(Suit::COUNT);
            let mut rank = None;
            let mut valid = true;

            for (s, top) in tops.iter().enumerate() {
                if s == excluded {
                    continue;
                }

                match top {
                    Some(top) if rank.is_none() || rank == Some(top.rank()) => {
                        rank = Some(top.rank());
                        cards.push(*top);
                    }
                    _ => {
                        valid = false;
                        break;
                    }
                }
            }

            if !valid {
                continue;
            }

            let mut next = state;
            for card in &cards {
                next[card.suit().index()] -= 1;
            }

            let removed = cards.iter().map(Card::value).sum::<u32>();
            let value = removed + self.best(next);
            if value > best.value {
                *best = Entry {
                    value,
                    step: Some(Step {
                        next,
                        meld: Some(Meld::set(cards)),
                    }),
                };
            }
        }
    }

    /// Melds runs walking down from the top of each suit window; every
    /// prefix of three or more consecutive ordinals is a candidate, longer
    /// runs keep extending until the first gap.
    fn best_runs(&mut self, state: State, best: &mut Entry) {
        for s in 0..Suit::COUNT {
            let count = state[s];
            if count < 2 {
                continue;
            }

            let top = self.canonical.card(s, count - 1);
            let mut removed = top.value();
            let mut cards = vec![top];

            for taken in 2..=count {
                let card = self.canonical.card(s, count - taken);
                if card.ordinal() + 1 != cards[cards.len() - 1].ordinal() {
                    break;
                }

                removed += card.value();
                cards.push(card);

                if taken >= 3 {
                    let mut next = state;
                    next[s] = count - taken;

                    let value = removed + self.best(next);
                    if value > best.value {
                        let mut run = cards.clone();
                        run.reverse();

                        *best = Entry {
                            value,
                            step: Some(Step {
                                next,
                                meld: Some(Meld::run(run)),
                            }),
                        };
                    }
                }
            }
        }
    }

    /// Rebuilds the melds of an optimal partition from the recorded best
    /// transitions.
    fn melds(&self, state: State) -> Vec<Meld> {
        let mut melds = Vec::new();

        let mut state = state;
        while let Some(entry) = self.memo.get(&state) {
            if entry.value == 0 {
                break;
            }

            // A state with a positive value always records a transition.
            let Some(step) = &entry.step else {
                break;
            };

            if let Some(meld) = &step.meld {
                melds.push(meld.clone());
            }

            state = step.next;
        }

        melds
    }
}
