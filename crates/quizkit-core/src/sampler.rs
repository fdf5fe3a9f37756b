//! Random question selection.
//!
//! A sample is drawn by shuffling a copy of the pool with Fisher–Yates and
//! keeping the first `n` elements, so every ordering of the pool is equally
//! likely and the pool itself is never touched.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SampleError;

/// Draw up to `n` distinct questions from `pool` using the thread RNG.
///
/// Returns `min(n, pool.len())` elements.
pub fn sample<T: Clone>(pool: &[T], n: usize) -> Vec<T> {
    sample_with_rng(pool, n, &mut rand::thread_rng())
}

/// Like [`sample`], but driven by the given RNG (use a seeded one for
/// reproducible quizzes).
pub fn sample_with_rng<T, R>(pool: &[T], n: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if n == 0 || pool.is_empty() {
        return Vec::new();
    }

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(n);
    shuffled
}

/// Sample with a signed count, as read from JSON or the command line.
///
/// Negative counts are rejected instead of being clamped.
pub fn try_sample<T: Clone>(pool: &[T], n: i64) -> Result<Vec<T>, SampleError> {
    try_sample_with_rng(pool, n, &mut rand::thread_rng())
}

/// Like [`try_sample`], but driven by the given RNG.
pub fn try_sample_with_rng<T, R>(pool: &[T], n: i64, rng: &mut R) -> Result<Vec<T>, SampleError>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let n = usize::try_from(n).map_err(|_| SampleError::NegativeCount(n))?;
    Ok(sample_with_rng(pool, n, rng))
}
