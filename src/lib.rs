//! `vose`: O(1) sampling from discrete distributions.
//!
//! Build an [`AliasTable`] once from a probability vector (O(N)), then draw from
//! it in constant time through any number of [`BiasedSampler`]s, each bound to its
//! own uniform source. [`BiasedBitSource`] is the one-parameter special case: a
//! biased coin.
//!
//! Both samplers can also fill byte buffers (and implement [`std::io::Read`]):
//! - samples are packed as fixed-width big-endian integers;
//! - bits are packed eight per byte, least significant bit first.
//!
//! Exposed modules:
//! - `alias`: alias-table construction (Vose's method).
//! - `sampler`: draws and packed sample streams over a table.
//! - `bits`: biased bits and packed bit streams.
//! - `pack`: the byte layouts shared by the streams.
//!
//! ```
//! use rand::SeedableRng;
//! use vose::AliasTable;
//!
//! let table = AliasTable::new(&[0.2, 0.6, 0.2])?;
//! let mut sampler = table.sampler(rand::rngs::StdRng::seed_from_u64(7));
//! assert!(sampler.sample_one() < 3);
//! # Ok::<(), vose::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod alias;
pub mod bits;
pub mod error;
pub mod pack;
pub mod sampler;

pub use alias::{AliasTable, SUM_TOLERANCE};
pub use bits::BiasedBitSource;
pub use error::{Error, Result};
pub use sampler::BiasedSampler;
