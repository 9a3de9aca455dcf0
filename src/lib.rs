//! Parallel minimum interval cover.
//!
//! Given intervals whose left and right endpoints are both non-decreasing
//! and which leave no gaps, select the fewest intervals whose union covers
//! the union of all of them. The greedy jump-chain `0 -> furthest(0) -> ...
//! -> n-1` is the answer; this crate computes it in O(n) work and
//! O(log n) depth by contracting the chain onto a random landmark set.
//!
//! # Examples
//!
//! ```
//! use intercover::minimum_cover;
//!
//! let intervals = [(0, 5), (1, 8), (3, 10), (7, 15), (12, 20)];
//! let valid = minimum_cover(intervals.len(), |i| intervals[i].0, |i| intervals[i].1);
//! assert_eq!(valid, vec![true, false, true, true, true]);
//! ```

pub mod cover;
pub mod error;

pub use cover::*;
pub use error::{Error, Result};
