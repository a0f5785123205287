//! Fabrication helpers for simulated platform output.
//!
//! All randomness in the engines flows through `Simulator` so a configured
//! seed makes every payload reproducible across runs.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG wrapper shared by the platform engines.
///
/// Interior mutability keeps engine methods `&self`; contention is irrelevant
/// at demo scale.
pub struct Simulator {
    rng: Mutex<StdRng>,
}

impl Simulator {
    /// Entropy-seeded simulator.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed-seed simulator for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seeded when the config carries a seed, entropy-backed otherwise.
    pub fn from_config(config: &attest_core::config::PlatformConfig) -> Self {
        match config.simulation_seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// A count in `[lo, hi]` inclusive.
    pub fn count(&self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.lock().gen_range(lo..=hi)
    }

    /// A score in `[lo, hi]`, rounded to one decimal place.
    pub fn score(&self, lo: f64, hi: f64) -> f64 {
        let raw = self.lock().gen_range(lo..=hi);
        (raw * 10.0).round() / 10.0
    }

    /// A percentage in `[0, 100]`, rounded to one decimal place.
    pub fn percentage(&self) -> f64 {
        self.score(0.0, 100.0)
    }

    /// True with probability `p`.
    pub fn chance(&self, p: f64) -> bool {
        self.lock().gen_bool(p.clamp(0.0, 1.0))
    }

    /// Pick one of the given options.
    ///
    /// `options` must be non-empty; the engines pass fixed vocabularies.
    pub fn pick<'a, T>(&self, options: &'a [T]) -> &'a T {
        debug_assert!(!options.is_empty(), "pick requires at least one option");
        let idx = self.lock().gen_range(0..options.len());
        &options[idx]
    }

    /// Split `total` into `(passed, failed, other)` with roughly the given
    /// pass ratio. The three parts always sum to `total`.
    pub fn split_results(&self, total: u32, pass_ratio: f64) -> (u32, u32, u32) {
        let passed = (f64::from(total) * pass_ratio.clamp(0.0, 1.0)).round() as u32;
        let passed = passed.min(total);
        let remaining = total - passed;
        let failed = if remaining == 0 {
            0
        } else {
            self.count(0, remaining)
        };
        (passed, failed, remaining - failed)
    }

    /// A duration in milliseconds within `[lo, hi]`.
    pub fn duration_ms(&self, lo: u64, hi: u64) -> u64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.lock().gen_range(lo..=hi)
    }
}

impl Simulator {
    /// Recover from a poisoned lock; the RNG state is still usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
