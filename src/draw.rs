// src/draw.rs
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::warn;

/// Source of randomness for state collapse.
pub trait WeightedDraw {
    /// Picks an index into `weights` with probability proportional to its weight.
    /// `weights` is never empty; the result must be a valid index.
    fn draw(&mut self, weights: &[f64]) -> usize;
}

/// Index of the largest weight, lowest index on ties.
pub(crate) fn heaviest_index(weights: &[f64]) -> usize {
    let mut best = 0;
    for (i, w) in weights.iter().enumerate().skip(1) {
        if *w > weights[best] { best = i; }
    }
    best
}

/// Weighted sampling backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDraw<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDraw<R> {
    pub fn new(rng: R) -> Self { RngDraw { rng } }
}

impl RngDraw<StdRng> {
    pub fn seeded(seed: u64) -> Self { RngDraw::new(StdRng::seed_from_u64(seed)) }
    pub fn from_entropy() -> Self { RngDraw::new(StdRng::from_os_rng()) }
}

impl<R: Rng> WeightedDraw for RngDraw<R> {
    fn draw(&mut self, weights: &[f64]) -> usize {
        match WeightedIndex::new(weights) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(e) => {
                // Only reachable once repeated splits underflow every weight.
                warn!(error = %e, count = weights.len(), "unusable collapse weights, keeping heaviest state");
                heaviest_index(weights)
            }
        }
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
/// Indices past the end of the weights are clamped to the last entry.
#[derive(Debug, Clone)]
pub struct FixedDraw {
    indices: VecDeque<usize>,
}

impl FixedDraw {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        FixedDraw { indices: indices.into_iter().collect() }
    }
}

impl WeightedDraw for FixedDraw {
    fn draw(&mut self, weights: &[f64]) -> usize {
        let idx = match self.indices.pop_front() {
            Some(idx) => { self.indices.push_back(idx); idx }
            None => 0,
        };
        idx.min(weights.len().saturating_sub(1))
    }
}
