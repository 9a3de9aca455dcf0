//! Precondition and result checks.
//!
//! Used by the verification mode of the solver and by tests. None of these run
//! on the default hot path.

use log::trace;
use rayon::prelude::*;
use std::fmt::Debug;

use super::Endpoint;
use crate::error::{Error, Result};

/// Checks the ordering preconditions of the solver.
///
/// For every `i`: `L(i) < R(i)`, and for every consecutive pair
/// `L(i) <= L(i+1)`, `R(i) <= R(i+1)` and `L(i+1) <= R(i)` (no gaps).
///
/// # Returns
/// * `Ok(())` - All preconditions hold
/// * `Err(Error::PreconditionViolated)` - The smallest offending index
///
/// # Examples
/// ```
/// use intercover::{check_preconditions, Error};
///
/// let ok = [(0, 5), (5, 10)];
/// assert!(check_preconditions(2, |i| ok[i].0, |i| ok[i].1).is_ok());
///
/// let gap = [(0, 5), (6, 10)];
/// let err = check_preconditions(2, |i| gap[i].0, |i| gap[i].1).unwrap_err();
/// assert!(matches!(err, Error::PreconditionViolated { index: 0, .. }));
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn check_preconditions<T, L, R>(n: usize, l: L, r: R) -> Result<()>
where
    T: Endpoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    trace!("checking preconditions over {} intervals", n);
    let violation = (0..n).into_par_iter().find_map_first(|i| {
        let (li, ri) = (l(i), r(i));
        // negated comparisons so that unordered values (NaN) are rejected
        if !(li < ri) {
            return Some(Error::precondition(
                i,
                format!("empty interval: L={:?} R={:?}", li, ri),
            ));
        }
        if i + 1 == n {
            return None;
        }
        let (ln, rn) = (l(i + 1), r(i + 1));
        if !(li <= ln) {
            Some(Error::precondition(i, "left endpoints decrease"))
        } else if !(ri <= rn) {
            Some(Error::precondition(i, "right endpoints decrease"))
        } else if !(ln <= ri) {
            Some(Error::precondition(
                i,
                format!("gap: L({})={:?} > R({})={:?}", i + 1, ln, i, ri),
            ))
        } else {
            None
        }
    });
    violation.map_or(Ok(()), Err)
}

/// Indices of the selected intervals, ascending.
pub fn selected_indices(valid: &[bool]) -> Vec<usize> {
    valid
        .par_iter()
        .enumerate()
        .filter_map(|(i, &selected)| selected.then_some(i))
        .collect()
}

/// Checks that `valid` selects a gap-free cover of all intervals from which no
/// selected interval can be dropped.
///
/// Coverage: the first selection starts at `L(0)`, the last ends at `R(n-1)`,
/// and consecutive selections `a < b` satisfy `L(b) <= R(a)`.
/// Minimality: for consecutive selections `a < b < c`, `L(c) > R(a)`, and
/// neither end selection is covered by its neighbour.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn check_cover<T, L, R>(n: usize, l: L, r: R, valid: &[bool]) -> Result<()>
where
    T: Endpoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    if valid.len() != n {
        return Err(Error::broken_cover(
            valid.len().min(n),
            format!("expected {} flags, got {}", n, valid.len()),
        ));
    }
    if n == 0 {
        return Ok(());
    }

    let selected = selected_indices(valid);
    let (first, last) = match (selected.first(), selected.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(Error::broken_cover(0, "no interval selected")),
    };
    if l(first) > l(0) {
        return Err(Error::broken_cover(first, "cover starts after L(0)"));
    }
    if r(last) < r(n - 1) {
        return Err(Error::broken_cover(last, "cover ends before R(n-1)"));
    }

    let gap = selected
        .par_windows(2)
        .find_first(|w| l(w[1]) > r(w[0]))
        .map(|w| w[1]);
    if let Some(index) = gap {
        return Err(Error::broken_cover(index, "gap before selected interval"));
    }

    if selected.len() >= 2 {
        if !(l(selected[1]) > l(0)) {
            return Err(Error::broken_cover(first, "redundant first selection"));
        }
        if !(r(selected[selected.len() - 2]) < r(n - 1)) {
            return Err(Error::broken_cover(last, "redundant last selection"));
        }
    }
    let redundant = selected
        .par_windows(3)
        .find_first(|w| !(l(w[2]) > r(w[0])))
        .map(|w| w[1]);
    if let Some(index) = redundant {
        return Err(Error::broken_cover(index, "redundant selection"));
    }
    Ok(())
}

/// Compares a parallel result against its serial reference.
///
/// # Returns
/// * `Err(Error::Mismatch)` - The first index where the two differ
pub fn compare<V>(phase: &'static str, expected: &[V], actual: &[V]) -> Result<()>
where
    V: PartialEq + Debug + Sync,
{
    if expected.len() != actual.len() {
        return Err(Error::mismatch(
            phase,
            expected.len().min(actual.len()),
            expected.len(),
            actual.len(),
        ));
    }
    let first = expected
        .par_iter()
        .zip(actual.par_iter())
        .position_first(|(e, a)| e != a);
    match first {
        Some(index) => Err(Error::mismatch(
            phase,
            index,
            &expected[index],
            &actual[index],
        )),
        None => {
            trace!("{}: parallel and serial agree on {} entries", phase, expected.len());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preconditions_hold() {
        let iv = [(0, 5), (1, 8), (3, 10), (7, 15), (12, 20)];
        assert!(check_preconditions(iv.len(), |i| iv[i].0, |i| iv[i].1).is_ok());
        assert!(check_preconditions(0, |_| 0, |_| 1).is_ok());
    }

    #[test]
    fn test_preconditions_report_smallest_index() {
        let iv = [(0, 5), (1, 8), (9, 12), (10, 11), (20, 30)];
        let err = check_preconditions(iv.len(), |i| iv[i].0, |i| iv[i].1).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolated { index: 1, .. }));
        assert!(err.to_string().contains("gap"));
    }

    #[test]
    fn test_preconditions_reject_empty_and_decreasing() {
        let empty = [(0, 5), (5, 5)];
        let err = check_preconditions(2, |i| empty[i].0, |i| empty[i].1).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolated { index: 1, .. }));

        let decreasing = [(0, 5), (1, 4)];
        let err =
            check_preconditions(2, |i| decreasing[i].0, |i| decreasing[i].1).unwrap_err();
        assert!(err.to_string().contains("right endpoints decrease"));

        let nan = [(0.0, f64::NAN)];
        assert!(check_preconditions(1, |i| nan[i].0, |i| nan[i].1).is_err());
    }

    #[test]
    fn test_selected_indices() {
        assert_eq!(
            selected_indices(&[true, false, true, true, false]),
            vec![0, 2, 3]
        );
        assert!(selected_indices(&[]).is_empty());
    }

    #[test]
    fn test_check_cover_accepts_greedy() {
        let iv = [(0, 5), (1, 8), (3, 10), (7, 15), (12, 20)];
        let valid = [true, false, true, true, true];
        assert!(check_cover(iv.len(), |i| iv[i].0, |i| iv[i].1, &valid).is_ok());
    }

    #[test]
    fn test_check_cover_rejects_gap() {
        let iv = [(0, 5), (1, 8), (3, 10), (7, 15), (12, 20)];
        let valid = [true, false, false, true, true];
        let err = check_cover(iv.len(), |i| iv[i].0, |i| iv[i].1, &valid).unwrap_err();
        assert!(matches!(err, Error::BrokenCover { index: 3, .. }));
    }

    #[test]
    fn test_check_cover_rejects_redundant() {
        let iv = [(0, 5), (1, 8), (3, 10), (7, 15), (12, 20)];
        let valid = [true, true, true, true, true];
        let err = check_cover(iv.len(), |i| iv[i].0, |i| iv[i].1, &valid).unwrap_err();
        assert!(matches!(err, Error::BrokenCover { index: 1, .. }));
    }

    #[test]
    fn test_check_cover_rejects_missing_ends() {
        let iv = [(0, 5), (4, 10), (9, 15)];
        let no_last = [true, true, false];
        assert!(check_cover(3, |i| iv[i].0, |i| iv[i].1, &no_last).is_err());
        let nothing = [false, false, false];
        assert!(check_cover(3, |i| iv[i].0, |i| iv[i].1, &nothing).is_err());
        let short = [true, true];
        assert!(check_cover(3, |i| iv[i].0, |i| iv[i].1, &short).is_err());
    }

    #[test]
    fn test_compare() {
        assert!(compare("furthest", &[1, 2, 3], &[1, 2, 3]).is_ok());
        let err = compare("furthest", &[1, 2, 3], &[1, 5, 3]).unwrap_err();
        assert_eq!(err.to_string(), "furthest mismatch at 1: serial=2, parallel=5");
        assert!(compare("cover", &[true], &[true, false]).is_err());
    }
}
