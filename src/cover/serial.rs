//! Sequential reference implementations.
//!
//! These are the ground truth the parallel pipeline is shadow-checked against.
//! They are not meant for production use.

use super::Endpoint;

/// Furthest-reach mapping by a single monotone sweep.
///
/// The first answer is found by binary search over the whole sequence; every
/// later answer starts from the previous one, since answers never move left.
pub fn furthest_reach_serial<T, L, R>(n: usize, l: L, r: R) -> Vec<usize>
where
    T: Endpoint,
    L: Fn(usize) -> T,
    R: Fn(usize) -> T,
{
    let mut furthest_id = vec![0; n];
    if n == 0 {
        return furthest_id;
    }

    let reach = r(0);
    let (mut lo, mut hi) = (0, n);
    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if l(mid) <= reach {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    furthest_id[0] = lo;

    for i in 1..n {
        let mut cursor = furthest_id[i - 1].max(i);
        let reach = r(i);
        while cursor + 1 < n && l(cursor + 1) <= reach {
            cursor += 1;
        }
        furthest_id[i] = cursor;
    }
    furthest_id
}

/// Greedy minimum cover by a left-to-right scan.
///
/// Interval `i` is taken whenever the next interval would leave a gap after the
/// last taken one. The first and last intervals are always taken.
///
/// # Examples
/// ```
/// use intercover::minimum_cover_serial;
///
/// let iv = [(0, 5), (5, 10), (10, 15), (15, 20)];
/// let valid = minimum_cover_serial(iv.len(), |i| iv[i].0, |i| iv[i].1);
/// assert_eq!(valid, vec![true; 4]);
/// ```
pub fn minimum_cover_serial<T, L, R>(n: usize, l: L, r: R) -> Vec<bool>
where
    T: Endpoint,
    L: Fn(usize) -> T,
    R: Fn(usize) -> T,
{
    let mut valid = vec![false; n];
    if n == 0 {
        return valid;
    }
    valid[0] = true;
    valid[n - 1] = true;

    let mut last = 0;
    for (i, slot) in valid.iter_mut().enumerate().take(n - 1).skip(1) {
        if l(i + 1) > r(last) {
            *slot = true;
            last = i;
        }
    }
    valid
}
