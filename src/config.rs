//! Tuning knobs for the balancing pipeline.
//!
//! Every field has a default, so a JSON override file only needs the keys it
//! changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiceConfig {
    /// Share of each team, weakest first, that the shuffle pass draws from.
    pub fraction: f64,
    pub tries: usize,
    /// Relative score degradation an exchange may cause and still be kept.
    pub tolerance: f64,
    /// Absolute slack on top of `tolerance`; lets a zero score absorb float noise.
    pub base_epsilon: f64,
}

impl Default for SpiceConfig {
    fn default() -> Self {
        Self { fraction: 0.35, tries: 20, tolerance: 0.03, base_epsilon: 1e-9 }
    }
}

impl SpiceConfig {
    /// No exchanges at all.
    pub fn off() -> Self {
        Self { tries: 0, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub min_runs: usize,
    pub max_runs: usize,
    pub refine_max_iters: usize,
    pub improvement_epsilon: f64,
    /// Seeder jitter amplitude for the lowest rating.
    pub jitter_scale: f64,
    pub spice: SpiceConfig,
    /// Run the multi-start loop on rayon (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            min_runs: 10,
            max_runs: 60,
            refine_max_iters: 300,
            improvement_epsilon: 1e-9,
            jitter_scale: 0.5,
            spice: SpiceConfig::default(),
            parallel: false,
        }
    }
}

impl BalanceConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Restarts for a pool of `n`: `n` itself, kept inside `[min_runs, max_runs]`.
    pub fn runs_for(&self, n: usize) -> usize {
        n.clamp(self.min_runs, self.max_runs)
    }

    pub fn validate(&self) -> Result<()> {
        let bad = |msg: &str| Err(BalanceError::InvalidConfig(msg.to_string()));
        if self.min_runs == 0 {
            return bad("min_runs must be at least 1");
        }
        if self.max_runs < self.min_runs {
            return bad("max_runs must not be below min_runs");
        }
        if !(self.improvement_epsilon.is_finite() && self.improvement_epsilon >= 0.0) {
            return bad("improvement_epsilon must be finite and non-negative");
        }
        if !(self.jitter_scale.is_finite() && self.jitter_scale >= 0.0) {
            return bad("jitter_scale must be finite and non-negative");
        }
        let s = &self.spice;
        if !(s.fraction > 0.0 && s.fraction <= 1.0) {
            return bad("spice.fraction must be in (0, 1]");
        }
        if !(s.tolerance.is_finite() && s.tolerance >= 0.0) {
            return bad("spice.tolerance must be finite and non-negative");
        }
        if !(s.base_epsilon.is_finite() && s.base_epsilon >= 0.0) {
            return bad("spice.base_epsilon must be finite and non-negative");
        }
        Ok(())
    }
}
