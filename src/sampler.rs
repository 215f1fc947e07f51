//! Samplers bound to an alias table.
//!
//! A [`BiasedSampler`] pairs a shared [`AliasTable`] with its own uniform source.
//! It holds no counters of its own: all mutable state lives in the source.
//!
//! Notes:
//! - The sampler adds no locking. It is as thread-safe as its source, so give each
//!   concurrent consumer its own (independently seeded) source.

use std::io;

use rand::prelude::*;

use crate::alias::AliasTable;
use crate::pack;

/// Draws outcomes from an [`AliasTable`] using a caller-supplied uniform source.
#[derive(Debug)]
pub struct BiasedSampler<'a, R> {
    table: &'a AliasTable,
    rng: R,
    bytes_per_sample: usize,
}

impl<'a, R: Rng> BiasedSampler<'a, R> {
    /// Bind `table` to `rng`. See also [`AliasTable::sampler`].
    pub fn new(table: &'a AliasTable, rng: R) -> Self {
        Self {
            table,
            rng,
            bytes_per_sample: pack::bytes_per_sample(table.num_outcomes()),
        }
    }

    /// Draw one outcome in `0..N`.
    #[inline]
    pub fn sample_one(&mut self) -> usize {
        self.table.draw(&mut self.rng)
    }

    /// Fill `buf` with packed samples.
    ///
    /// Each sample is a big-endian unsigned integer of
    /// [`bytes_per_sample`](Self::bytes_per_sample) bytes. Only whole samples are
    /// written; a trailing remainder shorter than one sample is left untouched.
    /// Returns the number of bytes written.
    ///
    /// Size `buf` as a multiple of `bytes_per_sample` to have it filled completely.
    pub fn fill_buffer(&mut self, buf: &mut [u8]) -> usize {
        let width = self.bytes_per_sample;
        let mut written = 0;
        for chunk in buf.chunks_exact_mut(width) {
            let x = self.sample_one();
            pack::write_be(x, chunk);
            written += width;
        }
        written
    }

    /// Bytes per packed sample.
    pub fn bytes_per_sample(&self) -> usize {
        self.bytes_per_sample
    }

    /// The table this sampler draws from.
    pub fn table(&self) -> &'a AliasTable {
        self.table
    }

    /// Release the uniform source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// Byte-stream view of [`BiasedSampler::fill_buffer`].
///
/// The stream never ends. A non-empty buffer too short for one sample is
/// rejected with [`io::ErrorKind::InvalidInput`] rather than reported as EOF.
///
/// Buffers must be a multiple of
/// [`bytes_per_sample`](BiasedSampler::bytes_per_sample) long. Otherwise
/// `read_exact` writes the whole samples, then fails on the remainder and
/// leaves the buffer partly filled.
impl<R: Rng> io::Read for BiasedSampler<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !buf.is_empty() && buf.len() < self.bytes_per_sample {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "buffer of {} bytes cannot hold a {}-byte sample",
                    buf.len(),
                    self.bytes_per_sample
                ),
            ));
        }
        Ok(self.fill_buffer(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Read;

    #[test]
    fn sample_one_stays_in_range() {
        let table = AliasTable::new(&[0.09, 0.4, 0.01, 0.5]).expect("valid");
        let mut s = table.sampler(ChaCha8Rng::seed_from_u64(1));
        for _ in 0..10_000 {
            assert!(s.sample_one() < 4);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let table = AliasTable::new(&[0.2, 0.6, 0.2]).expect("valid");
        let a: Vec<usize> = {
            let mut s = table.seeded_sampler(7);
            (0..64).map(|_| s.sample_one()).collect()
        };
        let b: Vec<usize> = {
            let mut s = table.seeded_sampler(7);
            (0..64).map(|_| s.sample_one()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn borrowed_source_keeps_advancing() {
        let table = AliasTable::new(&[0.5, 0.5]).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let first: Vec<usize> = {
            let mut s = table.sampler(&mut rng);
            (0..32).map(|_| s.sample_one()).collect()
        };
        let mut replay = ChaCha8Rng::seed_from_u64(5);
        let expected: Vec<usize> = (0..32).map(|_| table.draw(&mut replay)).collect();
        assert_eq!(first, expected);
        // The lent source continues where the sampler left off.
        assert_eq!(table.draw(&mut rng), table.draw(&mut replay));
    }

    #[test]
    fn into_inner_continues_the_stream() {
        let table = AliasTable::new(&[0.3, 0.7]).expect("valid");
        let mut s = table.sampler(ChaCha8Rng::seed_from_u64(13));
        assert!(std::ptr::eq(s.table(), &table));

        let drawn: Vec<usize> = (0..16).map(|_| s.sample_one()).collect();
        let mut rest = s.into_inner();

        let mut replay = ChaCha8Rng::seed_from_u64(13);
        let expected: Vec<usize> = (0..16).map(|_| table.draw(&mut replay)).collect();
        assert_eq!(drawn, expected);
        assert_eq!(rest.next_u64(), replay.next_u64());
    }

    #[test]
    fn fill_writes_whole_samples_only() {
        let table = AliasTable::new(&vec![1.0 / 357.0; 357]).expect("valid");
        let mut s = table.sampler(ChaCha8Rng::seed_from_u64(2));
        assert_eq!(s.bytes_per_sample(), 2);

        let mut buf = [0xaau8; 7];
        assert_eq!(s.fill_buffer(&mut buf), 6);
        assert_eq!(buf[6], 0xaa);
        for pair in buf[..6].chunks_exact(2) {
            assert!(pack::read_be(pair) < 357);
        }
    }

    #[test]
    fn fill_matches_sample_one() {
        let table = AliasTable::new(&[0.1, 0.2, 0.3, 0.4]).expect("valid");
        let mut a = table.sampler(ChaCha8Rng::seed_from_u64(9));
        let mut b = table.sampler(ChaCha8Rng::seed_from_u64(9));

        let mut buf = [0u8; 32];
        assert_eq!(a.fill_buffer(&mut buf), 32);
        let expected: Vec<u8> = (0..32).map(|_| b.sample_one() as u8).collect();
        assert_eq!(buf.to_vec(), expected);
    }

    #[test]
    fn reader_rejects_short_buffers() {
        let table = AliasTable::new(&vec![1.0 / 300.0; 300]).expect("valid");
        let mut s = table.seeded_sampler(1);

        let mut tiny = [0u8; 1];
        let err = s.read(&mut tiny).expect_err("too short");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        assert_eq!(s.read(&mut []).expect("empty ok"), 0);

        let mut buf = [0u8; 10];
        s.read_exact(&mut buf).expect("whole samples");

        let mut ragged = [0u8; 11];
        let err = s.read_exact(&mut ragged).expect_err("odd remainder");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
