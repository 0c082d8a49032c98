// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example deadwood
// ...
// Hands:       100000
// Elapsed:     1.232s
// Hands/sec:   81139
//
// Mean deadwood:   52.6
// Gin hands:       0
// Deadwood <= 10:  37
// ```

use std::time::Instant;

use rand::prelude::*;

use ninecard_eval::{Deck, HandScore};

fn main() {
    const HANDS: usize = 100_000;

    let mut rng = StdRng::seed_from_u64(0);

    let now = Instant::now();
    let mut total = 0u64;
    let mut gin = 0usize;
    let mut knockable = 0usize;

    for _ in 0..HANDS {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hand = (0..9).map(|_| deck.deal()).collect::<Vec<_>>();

        let deadwood = HandScore::eval(&hand).deadwood();
        total += u64::from(deadwood);
        if deadwood == 0 {
            gin += 1;
        }
        if deadwood <= 10 {
            knockable += 1;
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Hands:       {HANDS}");
    println!("Elapsed:     {elapsed:.3}s");
    println!("Hands/sec:   {:.0}\n", HANDS as f64 / elapsed);

    println!("Mean deadwood:   {:.1}", total as f64 / HANDS as f64);
    println!("Gin hands:       {gin}");
    println!("Deadwood <= 10:  {knockable}");
}
