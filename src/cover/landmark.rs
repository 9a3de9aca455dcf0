//! # Landmark Sampling and Linking
//!
//! The greedy jump-chain is a pointer chase and cannot be followed in parallel
//! directly. Instead a sparse random subset of intervals (landmarks) is drawn,
//! and from every landmark the chain is followed only until it hits the next
//! landmark. This contracts the chain onto the landmarks; the contracted graph
//! is small enough to walk sequentially.
//!
//! Sampling is reproducible: the mask is cut into fixed chunks and each chunk
//! draws from its own ChaCha stream keyed by the seed, so the result does not
//! depend on thread count or scheduling.

use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Intervals per random stream when drawing the landmark mask.
const SAMPLE_CHUNK: usize = 4096;

/// A landmark set over `[0, n)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Landmarks {
    /// `mask[i]` is true iff interval `i` is a landmark
    pub mask: Vec<bool>,
    /// Landmark indices, ascending
    pub ids: Vec<usize>,
    /// Expected spacing between landmarks
    pub block_size: usize,
}

impl Landmarks {
    /// Number of landmarks.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no landmark was sampled.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `index` is a landmark.
    pub fn contains(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Position of `index` within `ids`, if it is a landmark.
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.ids.binary_search(&index).ok()
    }
}

/// Draws landmarks over `n` intervals with expected density `1 / block_size`.
///
/// Intervals `0` and `n - 1` are always landmarks. Equal `(n, block_size, seed)`
/// always give equal landmarks.
///
/// # Examples
/// ```
/// use intercover::sample_landmarks;
///
/// let landmarks = sample_landmarks(10_000, 100, 7);
/// assert_eq!(landmarks.ids.first(), Some(&0));
/// assert_eq!(landmarks.ids.last(), Some(&9_999));
/// assert_eq!(landmarks, sample_landmarks(10_000, 100, 7));
/// ```
pub fn sample_landmarks(n: usize, block_size: usize, seed: u64) -> Landmarks {
    let block_size = block_size.max(1);
    let denominator = u32::try_from(block_size).unwrap_or(u32::MAX);

    let mut mask = vec![false; n];
    mask.par_chunks_mut(SAMPLE_CHUNK)
        .enumerate()
        .for_each(|(chunk, slots)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(chunk as u64);
            for slot in slots.iter_mut() {
                *slot = rng.gen_ratio(1, denominator);
            }
        });
    if n > 0 {
        mask[0] = true;
        mask[n - 1] = true;
    }

    let ids: Vec<usize> = mask
        .par_iter()
        .enumerate()
        .filter_map(|(i, &sampled)| sampled.then_some(i))
        .collect();

    debug!(
        "sampled {} landmarks over {} intervals (block size {})",
        ids.len(),
        n,
        block_size
    );

    Landmarks {
        mask,
        ids,
        block_size,
    }
}

/// For every landmark, follows `furthest_id` until it lands on another landmark.
///
/// Returns the landmark reached from each landmark, aligned with `landmarks.ids`.
/// The last interval links to itself. Every walk only reads `furthest_id` and
/// writes its own output slot.
///
/// # Complexity
/// * Work: O(n) in expectation, each walk has expected length `block_size`
/// * Depth: O(block_size) in expectation
pub fn link_landmarks(furthest_id: &[usize], landmarks: &Landmarks) -> Vec<usize> {
    landmarks
        .ids
        .par_iter()
        .map(|&start| {
            let mut current = furthest_id[start];
            while !landmarks.mask[current] {
                let next = furthest_id[current];
                if next <= current {
                    // only reachable when an interval cannot reach its successor
                    warn!("landmark walk from {} stalled at {}", start, current);
                    break;
                }
                current = next;
            }
            current
        })
        .collect()
}
