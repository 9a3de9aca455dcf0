//! # Chain Scan and Expansion
//!
//! Once every landmark knows the next landmark on its jump-chain, the true
//! greedy chain is recovered in two steps:
//!
//! 1. **Scan**: walk the contracted landmark graph from interval 0 to interval
//!    `n - 1`. Only O(n / block_size) landmarks are visited, so this pass is
//!    sequential.
//! 2. **Expand**: between two consecutive landmarks of that walk, follow the
//!    original `furthest_id` chain and mark every interval on it. Segments are
//!    disjoint, so `valid` is split into one slice per segment and every
//!    segment is filled by its own task.

use log::{debug, warn};
use rayon::prelude::*;

use super::landmark::Landmarks;
use crate::error::{Error, Result};

/// Walks the landmark graph from interval 0 until interval `n - 1`.
///
/// Marks every visited landmark in `valid` and returns the visited landmarks in
/// order, without the terminal one.
///
/// # Arguments
/// * `landmarks` - Landmark set, containing `0` and `n - 1`
/// * `next` - Landmark reached from each landmark, aligned with `landmarks.ids`
/// * `valid` - Selection flags, one per interval
pub fn scan_landmark_chain(
    landmarks: &Landmarks,
    next: &[usize],
    valid: &mut [bool],
) -> Vec<usize> {
    let n = valid.len();
    let mut chain = Vec::new();
    if n == 0 {
        return chain;
    }

    let mut current = 0;
    valid[current] = true;
    while current != n - 1 {
        let following = match landmarks.rank_of(current) {
            Some(rank) => next[rank],
            None => {
                warn!("landmark chain left the landmark set at {}", current);
                break;
            }
        };
        if following <= current {
            warn!("landmark chain stalled at {}", current);
            break;
        }
        chain.push(current);
        current = following;
        valid[current] = true;
    }

    debug!(
        "landmark chain visits {} of {} landmarks",
        chain.len() + 1,
        landmarks.len()
    );
    chain
}

/// Marks every interval on the jump-chain between consecutive landmarks of
/// `chain`.
///
/// Each walk starts at `furthest_id[s]` and stops exactly at the landmark
/// linked from `s`; the landmarks themselves are already marked by the scan.
///
/// # Returns
/// * `Ok(())` - Every walk ended on its landmark
/// * `Err(Error::Mismatch)` - A walk stalled or overshot, which means the
///   input broke the ordering preconditions
pub fn expand_chain(
    furthest_id: &[usize],
    landmarks: &Landmarks,
    next: &[usize],
    chain: &[usize],
    valid: &mut [bool],
) -> Result<()> {
    // (start landmark, linked landmark, flags strictly between them)
    let mut segments = Vec::with_capacity(chain.len());
    let mut rest: &mut [bool] = valid;
    let mut offset = 0;
    for &start in chain {
        let end = landmarks
            .rank_of(start)
            .map(|rank| next[rank])
            .ok_or_else(|| Error::broken_cover(start, "chain node is not a landmark"))?;
        if start < offset || end <= start {
            return Err(Error::broken_cover(start, "chain is not strictly increasing"));
        }
        let tail = std::mem::take(&mut rest);
        let (_, tail) = tail.split_at_mut(start + 1 - offset);
        let (between, tail) = tail.split_at_mut(end - start - 1);
        rest = tail;
        offset = end;
        segments.push((start, end, between));
    }

    segments
        .into_par_iter()
        .try_for_each(|(start, end, between)| {
            let mut current = furthest_id[start];
            while current < end {
                between[current - start - 1] = true;
                let following = furthest_id[current];
                if following <= current {
                    break;
                }
                current = following;
            }
            if current == end {
                Ok(())
            } else {
                Err(Error::mismatch("chain expansion", start, end, current))
            }
        })
}
