/// Stochastic mechanics: uniform draws, shuffles and placement jitter.
/// Generic over `RngCore` so callers inject the source; `bevy_prng::WyRand`
/// is what the crate seeds by default.
use rand_core::RngCore;

/// Uniform in [0, 1) from the top 53 bits.
#[inline]
pub fn unit01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Uniform index in `0..n`. `n` must be non-zero.
#[inline]
pub fn below<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> usize {
    debug_assert!(n > 0);
    ((unit01(rng) * n as f64) as usize).min(n - 1)
}

/// Zero-mean uniform noise in [-amplitude, amplitude).
#[inline]
pub fn symmetric<R: RngCore + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    (unit01(rng) * 2.0 - 1.0) * amplitude
}

/// Fisher–Yates, back to front.
pub fn shuffle<T, R: RngCore + ?Sized>(rng: &mut R, xs: &mut [T]) {
    for i in (1..xs.len()).rev() {
        let j = below(rng, i + 1);
        xs.swap(i, j);
    }
}

/// Placement jitter for the seeder: zero-mean, widest at `lo`, narrowing
/// linearly to a quarter of `scale` at `hi`.
#[inline]
pub fn rating_jitter<R: RngCore + ?Sized>(rng: &mut R, rating: f64, scale: f64, lo: f64, hi: f64) -> f64 {
    let span = (hi - lo).max(f64::EPSILON);
    let weakness = ((hi - rating) / span).clamp(0.0, 1.0);
    symmetric(rng, scale * (0.25 + 0.75 * weakness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_prng::WyRand;
    use rand_core::SeedableRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = WyRand::from_seed(7u64.to_le_bytes());
        let mut xs: Vec<u32> = (0..32).collect();
        shuffle(&mut rng, &mut xs);
        let mut sorted = xs.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = WyRand::from_seed(11u64.to_le_bytes());
        for n in 1..20 {
            for _ in 0..200 {
                assert!(below(&mut rng, n) < n);
            }
        }
    }

    #[test]
    fn jitter_widens_for_weaker_ratings() {
        let mut rng = WyRand::from_seed(3u64.to_le_bytes());
        let mut max_strong: f64 = 0.0;
        let mut max_weak: f64 = 0.0;
        for _ in 0..2_000 {
            max_strong = max_strong.max(rating_jitter(&mut rng, 10.0, 1.0, 1.0, 10.0).abs());
            max_weak = max_weak.max(rating_jitter(&mut rng, 1.0, 1.0, 1.0, 10.0).abs());
        }
        assert!(max_strong <= 0.25);
        assert!(max_weak > 0.5 && max_weak <= 1.0);
    }
}
