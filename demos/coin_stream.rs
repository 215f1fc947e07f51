//! Flip a biased coin one bit at a time, then as a packed byte stream.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vose::BiasedBitSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pr_head = 0.1;
    let n_coins = 16;

    let mut coins = BiasedBitSource::new(pr_head, ChaCha8Rng::seed_from_u64(7))?;
    let heads = (0..n_coins).filter(|_| coins.sample_one()).count();
    println!("{heads} heads in {n_coins} single flips (p={pr_head})");

    let mut buf = [0u8; 2];
    let n = coins.fill_buffer(&mut buf);
    let heads = vose::pack::count_ones(&buf[..n]);
    println!("{heads} heads in {} packed flips: {:08b} {:08b}", 8 * n, buf[1], buf[0]);

    Ok(())
}
