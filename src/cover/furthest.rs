//! # Furthest Reach
//!
//! For every interval `i`, computes `furthest_id[i] = max { j : L(j) <= R(i) }`,
//! the furthest interval a greedy cover can jump to from `i` while staying
//! connected. Both `L` and `R` are sorted, so this is a merge of two sorted
//! sequences and parallelizes by divide-and-conquer:
//!
//! 1. Take the middle interval `mid` of the current range and binary-search its
//!    answer inside the candidate window.
//! 2. Answers are monotone in `i`, so everything left of `mid` answers inside
//!    `[window_lo, furthest_id[mid]]` and everything right of it inside
//!    `[furthest_id[mid], window_hi]`. Recurse on both halves with `rayon::join`.
//! 3. Once the range plus its window is small, sweep a single cursor forward.
//!
//! Complexity: O(n) work, O(log n) depth.

use super::Endpoint;

/// Computes the furthest-reach mapping for `n` intervals.
///
/// # Arguments
/// * `n` - Number of intervals
/// * `l`, `r` - Endpoint accessors, both non-decreasing with `L(i+1) <= R(i)`
/// * `threshold` - Combined range size below which a linear sweep is used
///
/// # Returns
/// `furthest_id`, with `furthest_id[i] >= i` and non-decreasing in `i`.
///
/// # Examples
/// ```
/// use intercover::furthest_reach;
///
/// let iv = [(0, 5), (1, 8), (3, 10), (7, 15), (12, 20)];
/// let f = furthest_reach(iv.len(), |i| iv[i].0, |i| iv[i].1, 2000);
/// assert_eq!(f, vec![2, 3, 3, 4, 4]);
/// ```
pub fn furthest_reach<T, L, R>(n: usize, l: L, r: R, threshold: usize) -> Vec<usize>
where
    T: Endpoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    let mut furthest_id = vec![0; n];
    if n == 0 {
        return furthest_id;
    }
    let task = Merge {
        l: &l,
        r: &r,
        threshold: threshold.max(1),
    };
    task.solve(&mut furthest_id, 0, 0, n - 1);
    furthest_id
}

struct Merge<'a, L, R> {
    l: &'a L,
    r: &'a R,
    threshold: usize,
}

impl<L, R, T> Merge<'_, L, R>
where
    T: Endpoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    /// Fills `out`, which holds the answers for intervals `lo..lo + out.len()`.
    /// Every answer is known to lie in `[window_lo, window_hi]`.
    fn solve(&self, out: &mut [usize], lo: usize, window_lo: usize, window_hi: usize) {
        if out.is_empty() {
            return;
        }
        if out.len() + (window_hi - window_lo) < self.threshold {
            self.sweep(out, lo, window_lo, window_hi);
            return;
        }

        let mid = out.len() / 2;
        let i = lo + mid;
        let furthest = self.search(i, window_lo.max(i).min(window_hi), window_hi);

        let (left, rest) = out.split_at_mut(mid);
        let (slot, right) = rest.split_at_mut(1);
        slot[0] = furthest;

        rayon::join(
            || self.solve(left, lo, window_lo, furthest),
            || self.solve(right, i + 1, furthest, window_hi),
        );
    }

    /// Rightmost `j` in `[lo, hi]` with `L(j) <= R(i)`; `L(lo) <= R(i)` must hold.
    fn search(&self, i: usize, mut lo: usize, mut hi: usize) -> usize {
        let reach = (self.r)(i);
        while lo < hi {
            let mid = lo + (hi - lo).div_ceil(2);
            if (self.l)(mid) <= reach {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        lo
    }

    fn sweep(&self, out: &mut [usize], lo: usize, window_lo: usize, window_hi: usize) {
        let mut cursor = window_lo;
        for (k, slot) in out.iter_mut().enumerate() {
            let i = lo + k;
            cursor = cursor.max(i).min(window_hi);
            let reach = (self.r)(i);
            while cursor < window_hi && (self.l)(cursor + 1) <= reach {
                cursor += 1;
            }
            *slot = cursor;
        }
    }
}
