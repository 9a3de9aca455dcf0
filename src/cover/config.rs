use crate::error::{Error, Result};

/// Block size of the parallel run-time; one landmark per block in expectation.
pub const DEFAULT_BLOCK_SIZE: usize = 2048;

/// Combined range size below which furthest-reach falls back to a linear sweep.
pub const DEFAULT_MERGE_THRESHOLD: usize = 2000;

/// Smallest block size an adaptive density may resolve to.
pub const MIN_BLOCK_SIZE: usize = 64;

/// Landmark density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockSize {
    /// One landmark per `b` intervals in expectation, regardless of input size.
    Fixed(usize),
    /// Roughly `k` landmarks per rayon worker thread, so each worker gets `k`
    /// linker walks of comparable cost.
    PerWorker(usize),
}

impl Default for BlockSize {
    fn default() -> Self {
        BlockSize::Fixed(DEFAULT_BLOCK_SIZE)
    }
}

impl BlockSize {
    /// Resolves the density to a concrete block size for `n` intervals on
    /// `workers` threads.
    pub fn resolve(self, n: usize, workers: usize) -> usize {
        match self {
            BlockSize::Fixed(b) => b.max(1),
            BlockSize::PerWorker(k) => {
                let landmarks = k.max(1).saturating_mul(workers.max(1));
                (n / landmarks).max(MIN_BLOCK_SIZE)
            }
        }
    }
}

/// Parameters for the parallel cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverConfig {
    /// Key of the landmark random stream. Equal seeds give equal landmarks.
    pub seed: u64,
    /// Landmark density
    pub block_size: BlockSize,
    /// Base-case cutoff of the furthest-reach recursion
    pub merge_threshold: usize,
    /// Shadow every run with the serial reference and abort on divergence
    pub verify: bool,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            block_size: BlockSize::default(),
            merge_threshold: DEFAULT_MERGE_THRESHOLD,
            verify: cfg!(feature = "verify"),
        }
    }
}

impl CoverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_block_size(mut self, block_size: BlockSize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_merge_threshold(mut self, merge_threshold: usize) -> Self {
        self.merge_threshold = merge_threshold;
        self
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        match self.block_size {
            BlockSize::Fixed(0) => {
                return Err(Error::invalid_config("block size must be positive"))
            }
            BlockSize::PerWorker(0) => {
                return Err(Error::invalid_config(
                    "landmarks per worker must be positive",
                ))
            }
            _ => {}
        }
        if self.merge_threshold == 0 {
            return Err(Error::invalid_config("merge threshold must be positive"));
        }
        Ok(())
    }

    /// Block size for `n` intervals on the current rayon pool.
    pub fn resolved_block_size(&self, n: usize) -> usize {
        self.block_size.resolve(n, rayon::current_num_threads())
    }
}
