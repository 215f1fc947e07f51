//! Biased bit streams.
//!
//! A Bernoulli coin with fixed probability `pr_one` of heads, driven by a
//! caller-supplied uniform source. Bits are packed least significant bit first;
//! this is unrelated to the big-endian layout of [`BiasedSampler`](crate::BiasedSampler).

use std::io;

use rand::prelude::*;

use crate::error::{Error, Result};
use crate::pack;

/// Draws bits that are `true` with probability `pr_one`.
#[derive(Debug)]
pub struct BiasedBitSource<R> {
    pr_one: f64,
    rng: R,
}

impl<R: Rng> BiasedBitSource<R> {
    /// Create a bit source with `P(true) = pr_one`.
    pub fn new(pr_one: f64, rng: R) -> Result<Self> {
        if !(0.0..=1.0).contains(&pr_one) {
            return Err(Error::InvalidBias { pr_one });
        }
        Ok(Self { pr_one, rng })
    }

    /// Draw one bit.
    #[inline]
    pub fn sample_one(&mut self) -> bool {
        let x: f64 = self.rng.random();
        x < self.pr_one
    }

    /// Fill `buf` with packed bits, eight per byte, first draw in bit 0.
    ///
    /// Every byte is overwritten. Returns `buf.len()`.
    pub fn fill_buffer(&mut self, buf: &mut [u8]) -> usize {
        for byte in buf.iter_mut() {
            let bits = std::array::from_fn(|_| self.sample_one());
            *byte = pack::pack_bits(bits);
        }
        buf.len()
    }

    /// Probability of drawing `true`.
    pub fn pr_one(&self) -> f64 {
        self.pr_one
    }

    /// Release the uniform source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> io::Read for BiasedBitSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.fill_buffer(buf))
    }
}
