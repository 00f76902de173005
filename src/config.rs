//! Construction-time tuning for `ChainTable`.

use crate::error::{Error, Result};

/// Bucket count used when none (or zero) is requested.
pub const DEFAULT_CAPACITY: usize = 16;

/// Entries-per-bucket ratio above which an insert grows the table.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Each growth step multiplies the bucket count by this.
pub const GROWTH_FACTOR: usize = 2;

/// Table configuration. Fixed once the table is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    pub(crate) initial_capacity: usize,
    pub(crate) load_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting bucket count; zero falls back to [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn with_initial_capacity(mut self, n: usize) -> Self {
        self.initial_capacity = if n == 0 { DEFAULT_CAPACITY } else { n };
        self
    }

    /// Sets the growth threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLoadFactor`] for NaN, infinite, zero or
    /// negative values.
    pub fn with_load_factor(mut self, f: f64) -> Result<Self> {
        if !f.is_finite() || f <= 0.0 {
            return Err(Error::InvalidLoadFactor(f));
        }
        self.load_factor = f;
        Ok(self)
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }
}
