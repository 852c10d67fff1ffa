//! Simulation parameter and result types.

use crate::catalyst::NO_CATALYST_ID;
use kl_core::units::{Temperature, k};

/// Validated inputs for a single simulation run.
///
/// The upstream form guarantees the domain constraints (positive A,
/// non-negative Ea and concentration, temperature above 0 K); the
/// calculator clamps rather than rejects if something slips through.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Pre-exponential factor A, 1/s (positive).
    pub pre_exponential_factor_per_s: f64,
    /// Activation energy Ea, kJ/mol (non-negative).
    pub activation_energy_kj_mol: f64,
    /// Reaction temperature.
    pub temperature: Temperature,
    /// Initial concentration [C0], mol/L (non-negative).
    pub initial_concentration_mol_l: f64,
    /// Catalyst id from the catalyst table; unknown ids mean no reduction.
    pub catalyst_id: String,
}

impl Default for SimulationParameters {
    /// Room-temperature first-order defaults.
    fn default() -> Self {
        Self {
            pre_exponential_factor_per_s: 1e10,
            activation_energy_kj_mol: 75.0,
            temperature: k(298.0),
            initial_concentration_mol_l: 1.0,
            catalyst_id: NO_CATALYST_ID.to_string(),
        }
    }
}

/// Output of a single simulation run.
///
/// Ephemeral: the session replaces it wholesale on every run, no history
/// is retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Rate constant k, 1/s.
    pub rate_constant_per_s: f64,
    /// First-order reaction rate, mol/(L·s).
    pub reaction_rate_mol_l_s: f64,
    /// Activation energy after the catalyst reduction, kJ/mol.
    pub effective_activation_energy_kj_mol: f64,
}
