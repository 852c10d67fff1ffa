//! Linear temperature sweep shared by overlay charts.

use kl_core::units::{Temperature, k};

/// Inclusive linear sweep configuration.
///
/// The default covers 250 K to 450 K in 10 K steps (21 samples) and is the
/// x-axis alignment key across all chart datasets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureSweep {
    /// First sample (kelvin)
    pub min_k: f64,
    /// Upper bound (kelvin, inclusive when the step lands on it)
    pub max_k: f64,
    /// Increment between samples (kelvin)
    pub step_k: f64,
}

impl Default for TemperatureSweep {
    fn default() -> Self {
        Self {
            min_k: 250.0,
            max_k: 450.0,
            step_k: 10.0,
        }
    }
}

impl TemperatureSweep {
    /// Generate the ordered sample points.
    ///
    /// Starts at `min_k` and advances by `step_k` while the current value
    /// stays at or below `max_k`. Deterministic: the same configuration
    /// always yields the identical sequence. Misconfigured sweeps
    /// (non-positive step, inverted bounds) yield no points instead of
    /// looping.
    pub fn points(&self) -> Vec<Temperature> {
        if self.step_k <= 0.0 || self.min_k > self.max_k {
            return Vec::new();
        }
        let mut points = Vec::new();
        let mut t = self.min_k;
        while t <= self.max_k {
            points.push(k(t));
            t += self.step_k;
        }
        points
    }
}
