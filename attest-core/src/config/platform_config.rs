//! Compliance platform configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PASSING_SCORE;

/// Configuration for the compliance platform engines.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlatformConfig {
    /// Compliance score at or above which an assessment passes. Default: 80.0.
    pub passing_score: Option<f64>,
    /// RNG seed for simulated results. When set, engine output is
    /// reproducible across runs. Default: entropy-seeded.
    pub simulation_seed: Option<u64>,
    /// Platform ids to disable. Empty means all built-in engines register.
    #[serde(default)]
    pub disabled_platforms: Vec<String>,
}

impl PlatformConfig {
    /// Returns the effective passing score.
    pub fn effective_passing_score(&self) -> f64 {
        self.passing_score.unwrap_or(DEFAULT_PASSING_SCORE)
    }

    /// Returns whether a platform id is enabled.
    pub fn platform_enabled(&self, id: &str) -> bool {
        !self.disabled_platforms.iter().any(|p| p == id)
    }
}
