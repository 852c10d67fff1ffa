//! Simulation session: owned mutable state behind the two UI actions.

use kl_core::units::Temperature;
use kl_kinetics::{SimulationParameters, SimulationResult, TemperatureSweep, simulate};
use kl_results::{DatasetId, RateDataset, build_dataset, color_for_sequence};

use crate::error::{SessionError, SessionResult};

/// Maximum number of datasets held for overlay comparison.
pub const MAX_DATASETS: usize = 5;

/// One user's simulation state: latest run result, comparison datasets, and
/// the monotonically increasing dataset id counter.
///
/// Exclusively owned by its frontend instance. Both actions are synchronous
/// and run to completion before the next is accepted; there is no shared
/// state across sessions.
#[derive(Debug)]
pub struct SimulationSession {
    current_result: Option<SimulationResult>,
    datasets: Vec<RateDataset>,
    next_id: DatasetId,
    sweep: Vec<Temperature>,
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationSession {
    /// Session over the standard 250-450 K sweep.
    pub fn new() -> Self {
        Self::with_sweep(TemperatureSweep::default())
    }

    /// Session over a custom sweep.
    pub fn with_sweep(sweep: TemperatureSweep) -> Self {
        Self {
            current_result: None,
            datasets: Vec::new(),
            next_id: 1,
            sweep: sweep.points(),
        }
    }

    /// Run a single simulation and replace the current result.
    ///
    /// Total for validated parameters. The previous result is discarded;
    /// no history is retained.
    pub fn run(&mut self, params: &SimulationParameters) -> SimulationResult {
        let result = simulate(params);
        tracing::info!(
            k_per_s = result.rate_constant_per_s,
            rate_mol_l_s = result.reaction_rate_mol_l_s,
            effective_ea_kj_mol = result.effective_activation_energy_kj_mol,
            "simulation run complete"
        );
        self.current_result = Some(result);
        result
    }

    /// Build a dataset across the sweep and append it for comparison.
    ///
    /// Rejected without any state change once `MAX_DATASETS` are held.
    /// Identical parameter sets produce distinct datasets with fresh ids;
    /// append order is preserved, nothing is deduplicated.
    pub fn add_to_graph(&mut self, params: &SimulationParameters) -> SessionResult<&RateDataset> {
        if self.datasets.len() >= MAX_DATASETS {
            tracing::warn!(max = MAX_DATASETS, "dataset limit reached, add rejected");
            return Err(SessionError::DatasetLimitReached { max: MAX_DATASETS });
        }
        let id = self.next_id;
        let dataset = build_dataset(params, &self.sweep, id, color_for_sequence(id));
        tracing::info!(id, name = %dataset.name, "dataset added to graph");
        self.datasets.push(dataset);
        self.next_id += 1;
        Ok(self.datasets.last().expect("dataset just appended"))
    }

    /// Remove one dataset by id; ids of the remaining datasets are kept.
    ///
    /// Returns whether anything was removed.
    pub fn remove_dataset(&mut self, id: DatasetId) -> bool {
        let before = self.datasets.len();
        self.datasets.retain(|ds| ds.id != id);
        self.datasets.len() != before
    }

    /// Drop all comparison datasets. The id counter keeps counting up.
    pub fn clear_datasets(&mut self) {
        self.datasets.clear();
    }

    pub fn current_result(&self) -> Option<&SimulationResult> {
        self.current_result.as_ref()
    }

    pub fn datasets(&self) -> &[RateDataset] {
        &self.datasets
    }

    /// Sweep sample points shared by every dataset (x-axis key).
    pub fn sweep(&self) -> &[Temperature] {
        &self.sweep
    }
}
