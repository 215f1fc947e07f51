//! Byte-level packing shared by the sample and bit streams.
//!
//! Two independent conventions live here:
//! - samples are written as fixed-width **big-endian** unsigned integers,
//!   `bytes_per_sample(n)` bytes each;
//! - bits are packed eight to a byte, **least significant bit first**.

/// Minimum number of bytes able to hold any index in `0..n`.
///
/// Returns 1 for `n <= 1`, so every sample occupies at least one byte.
#[inline]
pub fn bytes_per_sample(n: usize) -> usize {
    let max = n.saturating_sub(1);
    let bits = (usize::BITS - max.leading_zeros()) as usize;
    bits.div_ceil(8).max(1)
}

/// Write `value` into `out` as a big-endian integer of width `out.len()`.
///
/// High bytes that do not fit are dropped; callers size `out` with
/// [`bytes_per_sample`] so nothing is lost. Widths beyond 8 bytes are
/// zero-padded on the left.
#[inline]
pub fn write_be(value: usize, out: &mut [u8]) {
    let bytes = (value as u64).to_be_bytes();
    let width = out.len().min(bytes.len());
    let (pad, tail) = out.split_at_mut(out.len() - width);
    pad.fill(0);
    tail.copy_from_slice(&bytes[bytes.len() - width..]);
}

/// Read a big-endian integer back out of `bytes` (inverse of [`write_be`]).
#[inline]
pub fn read_be(bytes: &[u8]) -> usize {
    bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize)
}

/// Pack eight bits into a byte, `bits[0]` landing in the least significant bit.
#[inline]
pub fn pack_bits(bits: [bool; 8]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |byte, (j, &bit)| byte | (u8::from(bit) << j))
}

/// Count set bits across a packed buffer.
pub fn count_ones(bytes: &[u8]) -> usize {
    bytes.iter().map(|b| b.count_ones() as usize).sum()
}
