//! Alias tables (Vose's alias method).
//!
//! Given a discrete distribution over `N` outcomes, build two parallel arrays
//! `prob` and `alias` such that:
//!
//! 1. draw `i` uniformly from `0..N`,
//! 2. return `i` with probability `prob[i]`, otherwise `alias[i]`,
//!
//! reproduces the distribution exactly. Setup is O(N); each draw costs two
//! uniform variates regardless of `N`.
//!
//! ## References
//!
//! - Walker (1977): *An Efficient Method for Generating Discrete Random Variables
//!   with General Distributions*.
//! - Vose (1991): *A Linear Algorithm for Generating Random Numbers with a Given
//!   Distribution*.
//!
//! Notes:
//! - A table is immutable once built. Share it by reference between any number of
//!   samplers, across threads included; it needs no locking.

use std::collections::VecDeque;

use rand::distr::Distribution;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::sampler::BiasedSampler;

/// Maximum `|1 - sum(p)|` accepted by [`AliasTable::new`].
pub const SUM_TOLERANCE: f64 = 1e-10;

/// Light and heavy buckets during construction.
///
/// Both are FIFO: ties are broken by discovery order, never by magnitude.
struct WorkQueues {
    small: VecDeque<usize>,
    large: VecDeque<usize>,
}

impl WorkQueues {
    fn with_capacity(n: usize) -> Self {
        Self {
            small: VecDeque::with_capacity(n),
            large: VecDeque::with_capacity(n),
        }
    }

    #[inline]
    fn push(&mut self, i: usize, weight: f64) {
        if weight < 1.0 {
            self.small.push_back(i);
        } else {
            self.large.push_back(i);
        }
    }

    #[inline]
    fn pop_pair(&mut self) -> Option<(usize, usize)> {
        if self.small.is_empty() || self.large.is_empty() {
            return None;
        }
        Some((self.small.pop_front()?, self.large.pop_front()?))
    }
}

/// An immutable alias table for a discrete distribution over `0..N`.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Build a table from a probability vector.
    ///
    /// Every entry must be finite and non-negative, and the entries must sum to 1
    /// within [`SUM_TOLERANCE`].
    pub fn new(probabilities: &[f64]) -> Result<Self> {
        let q = match renormalize(probabilities) {
            Ok(q) => q,
            Err(err) => {
                log::debug!("rejecting probability vector: {err}");
                return Err(err);
            }
        };
        let n = q.len();

        let mut queues = WorkQueues::with_capacity(n);
        for (i, &w) in q.iter().enumerate() {
            queues.push(i, w);
        }
        log::debug!(
            "building alias table: n={n} light={} heavy={}",
            queues.small.len(),
            queues.large.len()
        );

        Ok(Self::from_queues(q, queues))
    }

    fn from_queues(mut q: Vec<f64>, mut queues: WorkQueues) -> Self {
        let n = q.len();
        let mut prob = vec![0.0; n];
        // Saturated buckets alias themselves, so every entry stays in range.
        let mut alias: Vec<usize> = (0..n).collect();

        while let Some((l, g)) = queues.pop_pair() {
            prob[l] = q[l];
            alias[l] = g;
            q[g] = (q[g] + q[l]) - 1.0;
            queues.push(g, q[g]);
        }

        // Rounding can strand buckets in either queue; large is drained first.
        let stranded = queues.large.len() + queues.small.len();
        if stranded > 0 {
            log::trace!(
                "saturating {stranded} stranded buckets (large={}, small={})",
                queues.large.len(),
                queues.small.len()
            );
        }
        for i in queues.large.drain(..).chain(queues.small.drain(..)) {
            prob[i] = 1.0;
        }

        Self { prob, alias }
    }

    /// Number of outcomes `N`.
    pub fn num_outcomes(&self) -> usize {
        self.prob.len()
    }

    /// Acceptance probability per bucket.
    pub fn prob(&self) -> &[f64] {
        &self.prob
    }

    /// Fallback outcome per bucket. Meaningless where `prob[i] == 1`.
    pub fn alias(&self) -> &[usize] {
        &self.alias
    }

    /// Bind a sampler to this table and a uniform source.
    ///
    /// `rng` may be owned or lent (`&mut R` is itself an `Rng`).
    pub fn sampler<R: Rng>(&self, rng: R) -> BiasedSampler<'_, R> {
        BiasedSampler::new(self, rng)
    }

    /// Sampler over a deterministic PRNG seeded with `seed`.
    pub fn seeded_sampler(&self, seed: u64) -> BiasedSampler<'_, StdRng> {
        self.sampler(StdRng::seed_from_u64(seed))
    }

    /// Sampler over a cryptographically secure generator seeded by the OS.
    pub fn os_sampler(&self) -> BiasedSampler<'_, StdRng> {
        self.sampler(StdRng::from_os_rng())
    }

    /// Draw one outcome: a uniform bucket, then a biased coin.
    #[inline]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.random_range(0..self.prob.len());
        let x: f64 = rng.random();
        if x < self.prob[i] {
            i
        } else {
            self.alias[i]
        }
    }
}

impl Distribution<usize> for AliasTable {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.draw(rng)
    }
}

/// Validate `p` and scale it by `N`.
fn renormalize(p: &[f64]) -> Result<Vec<f64>> {
    if p.is_empty() {
        return Err(Error::Empty);
    }
    if let Some((index, &value)) = p
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(Error::InvalidProbability { index, value });
    }

    let residual = 1.0 - p.iter().sum::<f64>();
    if residual.abs() > SUM_TOLERANCE {
        return Err(Error::InvalidDistribution { residual });
    }

    let n = p.len() as f64;
    Ok(p.iter().map(|&x| x * n).collect())
}
