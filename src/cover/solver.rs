//! # Interval Cover Solver
//!
//! Sequences the phases of the parallel minimum cover and owns every array they
//! produce. Each array is written by exactly one phase, and phases are separated
//! by the join at the end of each parallel region.
//!
//! ## Example Usage
//! ```rust
//! use intercover::{CoverConfig, IntervalCover};
//!
//! let iv: Vec<(u32, u32)> = (0..10_000).map(|i| (3 * i, 3 * i + 7)).collect();
//! let mut solver = IntervalCover::new(iv.len(), |i| iv[i].0, |i| iv[i].1)
//!     .with_config(CoverConfig::new().with_seed(17));
//! let valid = solver.run();
//!
//! assert!(valid[0] && valid[iv.len() - 1]);
//! assert_eq!(valid.iter().filter(|&&v| v).count(), 5_001);
//! ```

use log::{debug, warn};

use super::chain::{expand_chain, scan_landmark_chain};
use super::config::CoverConfig;
use super::furthest::furthest_reach;
use super::landmark::{link_landmarks, sample_landmarks, Landmarks};
use super::serial::{furthest_reach_serial, minimum_cover_serial};
use super::verify::{check_preconditions, compare};
use super::Endpoint;
use crate::error::Result;

/// Parallel minimum interval cover over `n` intervals given by two accessors.
pub struct IntervalCover<L, R> {
    n: usize,
    l: L,
    r: R,
    config: CoverConfig,
    furthest_id: Vec<usize>,
    landmarks: Landmarks,
    landmark_next: Vec<usize>,
    chain: Vec<usize>,
    valid: Vec<bool>,
}

impl<T, L, R> IntervalCover<L, R>
where
    T: Endpoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    /// Creates a solver with the default configuration.
    ///
    /// `l` and `r` must be non-decreasing with `L(i) < R(i)` and
    /// `L(i+1) <= R(i)`. Violating input gives an unspecified selection; turn
    /// on verification to catch it.
    pub fn new(n: usize, l: L, r: R) -> Self {
        Self {
            n,
            l,
            r,
            config: CoverConfig::default(),
            furthest_id: Vec::new(),
            landmarks: Landmarks::default(),
            landmark_next: Vec::new(),
            chain: Vec::new(),
            valid: Vec::new(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: CoverConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether there are no intervals.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Configuration used by `run`.
    pub fn config(&self) -> &CoverConfig {
        &self.config
    }

    /// Furthest interval reachable in one greedy step, per interval.
    pub fn furthest_ids(&self) -> &[usize] {
        &self.furthest_id
    }

    /// Sampled landmarks.
    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    /// Landmark reached from each landmark, aligned with `landmarks().ids`.
    pub fn landmark_links(&self) -> &[usize] {
        &self.landmark_next
    }

    /// Landmarks on the greedy chain, in chain order, without interval `n - 1`.
    pub fn chain_landmarks(&self) -> &[usize] {
        &self.chain
    }

    /// Selection flags of the last run.
    pub fn valid(&self) -> &[bool] {
        &self.valid
    }

    /// Consumes the solver and returns the selection flags.
    pub fn into_valid(self) -> Vec<bool> {
        self.valid
    }

    /// Computes the minimum cover.
    ///
    /// # Panics
    ///
    /// With verification on, panics when the input breaks the ordering
    /// preconditions or when the parallel result differs from the serial
    /// reference.
    pub fn run(&mut self) -> &[bool] {
        if self.config.verify {
            if let Err(err) = check_preconditions(self.n, &self.l, &self.r) {
                panic!("{}", err);
            }
        }
        if let Err(err) = self.kernel() {
            if self.config.verify {
                panic!("{}", err);
            }
            warn!("interval cover is inconsistent: {}", err);
        }
        &self.valid
    }

    /// Computes the minimum cover, reporting bad configuration, violated
    /// preconditions and (with verification on) divergence from the serial
    /// reference as errors.
    pub fn try_run(&mut self) -> Result<&[bool]> {
        self.config.validate()?;
        check_preconditions(self.n, &self.l, &self.r)?;
        self.kernel()?;
        Ok(&self.valid)
    }

    fn kernel(&mut self) -> Result<()> {
        let n = self.n;
        self.valid = vec![false; n];
        if n == 0 {
            return Ok(());
        }
        if n <= 2 {
            self.valid[0] = true;
            self.valid[n - 1] = true;
            return Ok(());
        }

        self.compute_furthest()?;
        self.sample_landmarks();
        self.link_landmarks();
        self.scan_landmark_chain();
        self.expand_chain()?;

        if self.config.verify {
            let serial = minimum_cover_serial(n, &self.l, &self.r);
            compare("minimum cover", &serial, &self.valid)?;
        }
        debug!(
            "selected {} of {} intervals",
            self.valid.iter().filter(|&&v| v).count(),
            n
        );
        Ok(())
    }

    /// Phase 1: furthest-reach mapping.
    pub fn compute_furthest(&mut self) -> Result<()> {
        self.furthest_id = furthest_reach(self.n, &self.l, &self.r, self.config.merge_threshold);
        debug!("furthest reach computed for {} intervals", self.n);

        if self.config.verify {
            let serial = furthest_reach_serial(self.n, &self.l, &self.r);
            compare("furthest reach", &serial, &self.furthest_id)?;
        }
        Ok(())
    }

    /// Phase 2: landmark sampling.
    pub fn sample_landmarks(&mut self) {
        let block_size = self.config.resolved_block_size(self.n);
        self.landmarks = sample_landmarks(self.n, block_size, self.config.seed);
    }

    /// Phase 3: one contracted edge per landmark.
    ///
    /// # Panics
    ///
    /// Panics if phases 1 and 2 have not run.
    pub fn link_landmarks(&mut self) {
        self.landmark_next = link_landmarks(&self.furthest_id, &self.landmarks);
    }

    /// Phase 4: sequential walk over the contracted graph. Resets the
    /// selection and marks the landmarks on the chain.
    pub fn scan_landmark_chain(&mut self) {
        self.valid = vec![false; self.n];
        self.chain = scan_landmark_chain(&self.landmarks, &self.landmark_next, &mut self.valid);
    }

    /// Phase 5: marks the intervals between consecutive chain landmarks.
    pub fn expand_chain(&mut self) -> Result<()> {
        expand_chain(
            &self.furthest_id,
            &self.landmarks,
            &self.landmark_next,
            &self.chain,
            &mut self.valid,
        )
    }
}

/// Computes the minimum cover of `n` intervals with the default configuration.
///
/// # Examples
/// ```
/// use intercover::minimum_cover;
///
/// let iv = [(0, 5), (5, 10), (10, 15), (15, 20)];
/// assert_eq!(minimum_cover(iv.len(), |i| iv[i].0, |i| iv[i].1), vec![true; 4]);
/// ```
pub fn minimum_cover<T, L, R>(n: usize, l: L, r: R) -> Vec<bool>
where
    T: Endpoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    minimum_cover_with(n, l, r, &CoverConfig::default())
}

/// Computes the minimum cover of `n` intervals with an explicit configuration.
pub fn minimum_cover_with<T, L, R>(n: usize, l: L, r: R, config: &CoverConfig) -> Vec<bool>
where
    T: Endpoint,
    L: Fn(usize) -> T + Sync,
    R: Fn(usize) -> T + Sync,
{
    let mut solver = IntervalCover::new(n, l, r).with_config(config.clone());
    solver.run();
    solver.into_valid()
}
