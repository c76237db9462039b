// src/genres/sdk.rs

//! # Genre SDK
//!
//! Glue for orchestrators that run several systems together. The only one in
//! the crate is `multi_start`: seed → refine → spice, repeated from
//! independent random orderings, best score wins.
//!
//! Two helpers keep that shape reusable:
//! - [`run_starts`] executes one closure per start seed, in order or on rayon
//!   (feature `parallel`). Results come back in seed order either way.
//! - [`pick_best`] selects the lowest score, first seen on ties, so the winner
//!   does not depend on how the starts were scheduled.
//!
//! Each start must own its state. Hand the closure a seed, not a shared RNG.

/// Run `start(k, seed)` for every seed, results in seed order.
pub fn run_starts<T, F>(seeds: &[u64], parallel: bool, start: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, u64) -> T + Sync,
{
    if parallel {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            return seeds.par_iter().enumerate().map(|(k, &s)| start(k, s)).collect();
        }
        #[cfg(not(feature = "parallel"))]
        tracing::warn!("parallel starts requested but the `parallel` feature is off; running in order");
    }
    seeds.iter().enumerate().map(|(k, &s)| start(k, s)).collect()
}

/// Index of the lowest score; the earliest index wins ties.
pub fn pick_best<T>(items: &[T], score: impl Fn(&T) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (k, item) in items.iter().enumerate() {
        let s = score(item);
        if best.is_none_or(|(_, b)| s < b) {
            best = Some((k, s));
        }
    }
    best.map(|(k, _)| k)
}
