//! Minimum interval cover.
//!
//! The pipeline runs in five phases:
//! - `furthest`: for every interval, the furthest interval reachable in one greedy step
//! - `landmark`: sample a sparse reproducible landmark set and link each landmark
//!   to the next landmark on its jump-chain
//! - `chain`: walk the contracted landmark graph sequentially from interval 0, then
//!   expand every confirmed segment back onto the original chain in parallel
//!
//! `solver` sequences the phases, `serial` holds the sequential reference used for
//! verification, and `verify` holds the precondition and cover checks.

use num_traits::Num;
use std::fmt::Debug;

pub mod chain;
pub mod config;
pub mod furthest;
pub mod landmark;
pub mod serial;
pub mod solver;
pub mod verify;


/// Interval endpoint type: any totally ordered numeric type that can be shared
/// across worker threads.
pub trait Endpoint: Num + PartialOrd + Copy + Send + Sync + Debug {}

impl<T> Endpoint for T where T: Num + PartialOrd + Copy + Send + Sync + Debug {}

pub use chain::{expand_chain, scan_landmark_chain};
pub use config::{BlockSize, CoverConfig, DEFAULT_BLOCK_SIZE, DEFAULT_MERGE_THRESHOLD};
pub use furthest::furthest_reach;
pub use landmark::{link_landmarks, sample_landmarks, Landmarks};
pub use serial::{furthest_reach_serial, minimum_cover_serial};
pub use solver::{minimum_cover, minimum_cover_with, IntervalCover};
pub use verify::{check_cover, check_preconditions, selected_indices};
