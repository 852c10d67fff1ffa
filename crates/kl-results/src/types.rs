//! Chart-facing result data types.

use serde::{Deserialize, Serialize};

use crate::palette::SeriesColor;

/// Dataset identifier, assigned monotonically by the session and never
/// reused within it.
pub type DatasetId = u32;

/// One sample of the temperature sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatePoint {
    pub temperature_k: f64,
    pub rate_mol_l_s: f64,
    pub k_per_s: f64,
}

/// Parameter snapshot stored with a dataset for provenance and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetParams {
    pub pre_exponential_factor_per_s: f64,
    pub activation_energy_kj_mol: f64,
    pub effective_activation_energy_kj_mol: f64,
    pub temperature_k: f64,
    pub initial_concentration_mol_l: f64,
    pub catalyst_id: String,
}

/// A named, colored series spanning the full temperature sweep.
///
/// Never mutated after creation; overlay charts render one line per dataset,
/// keyed on `temperature_k`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateDataset {
    pub id: DatasetId,
    pub name: String,
    pub color: SeriesColor,
    pub points: Vec<RatePoint>,
    pub params: DatasetParams,
}
