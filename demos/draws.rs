//! Draw from a small distribution, then read a packed sample stream.
//!
//! With 512 outcomes each sample needs two bytes, written big-endian.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Read;
use vose::pack::read_be;
use vose::AliasTable;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pdf = [0.2, 0.6, 0.2];
    let table = AliasTable::new(&pdf)?;

    let mut seeded = table.seeded_sampler(7);
    let draws: Vec<usize> = (0..5).map(|_| seeded.sample_one()).collect();
    println!("pdf={pdf:?}");
    println!("seeded draws:      {draws:?}");

    let mut secure = table.os_sampler();
    let draws: Vec<usize> = (0..5).map(|_| secure.sample_one()).collect();
    println!("os-seeded draws:   {draws:?}");

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut lent = table.sampler(&mut rng);
    let draws: Vec<usize> = (0..5).map(|_| lent.sample_one()).collect();
    println!("caller rng draws:  {draws:?}");

    let wide = AliasTable::new(&vec![1.0 / 512.0; 512])?;
    let mut stream = wide.seeded_sampler(7);
    let width = stream.bytes_per_sample();
    let mut buf = [0u8; 16];
    stream.read_exact(&mut buf)?;

    println!();
    println!("{} outcomes, {width} bytes per sample:", wide.num_outcomes());
    for chunk in buf.chunks_exact(width) {
        println!("  {:02x?} -> {}", chunk, read_be(chunk));
    }

    Ok(())
}
