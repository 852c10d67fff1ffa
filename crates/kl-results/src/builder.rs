//! Dataset assembly over the temperature sweep.

use kl_core::units::{Temperature, in_kelvin};
use kl_kinetics::{
    SimulationParameters, catalyst_by_id, effective_activation_energy, rate_constant,
    reaction_rate,
};

use crate::palette::SeriesColor;
use crate::types::{DatasetId, DatasetParams, RateDataset, RatePoint};

/// Build one chart dataset from a parameter set.
///
/// Emits exactly one point per sweep temperature, in sweep order, no gaps.
/// The effective activation energy is computed once and reused for every
/// sample; id and color are assigned by the caller (the session).
pub fn build_dataset(
    params: &SimulationParameters,
    sweep: &[Temperature],
    id: DatasetId,
    color: SeriesColor,
) -> RateDataset {
    let effective_ea =
        effective_activation_energy(params.activation_energy_kj_mol, &params.catalyst_id);

    let points = sweep
        .iter()
        .map(|&t| {
            let k_per_s = rate_constant(params.pre_exponential_factor_per_s, effective_ea, t);
            RatePoint {
                temperature_k: in_kelvin(t),
                rate_mol_l_s: reaction_rate(k_per_s, params.initial_concentration_mol_l),
                k_per_s,
            }
        })
        .collect();

    RateDataset {
        id,
        name: dataset_name(id, effective_ea, &params.catalyst_id),
        color,
        points,
        params: DatasetParams {
            pre_exponential_factor_per_s: params.pre_exponential_factor_per_s,
            activation_energy_kj_mol: params.activation_energy_kj_mol,
            effective_activation_energy_kj_mol: effective_ea,
            temperature_k: in_kelvin(params.temperature),
            initial_concentration_mol_l: params.initial_concentration_mol_l,
            catalyst_id: params.catalyst_id.clone(),
        },
    }
}

/// Human-readable dataset label: sequence number, effective Ea to one
/// decimal, and the catalyst short label when one is selected.
fn dataset_name(id: DatasetId, effective_ea_kj_mol: f64, catalyst_id: &str) -> String {
    match catalyst_by_id(catalyst_id) {
        Some(catalyst) if !catalyst.is_none() => format!(
            "Set {id} (Ea: {effective_ea_kj_mol:.1} kJ/mol, Cat: {})",
            catalyst.short_label
        ),
        _ => format!("Set {id} (Ea: {effective_ea_kj_mol:.1} kJ/mol)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;
    use kl_kinetics::TemperatureSweep;

    fn params() -> SimulationParameters {
        SimulationParameters::default()
    }

    #[test]
    fn one_point_per_sweep_sample_in_order() {
        let sweep = TemperatureSweep::default().points();
        let ds = build_dataset(&params(), &sweep, 1, PALETTE[0]);
        assert_eq!(ds.points.len(), sweep.len());
        for (point, &t) in ds.points.iter().zip(sweep.iter()) {
            assert_eq!(point.temperature_k, in_kelvin(t));
        }
    }

    #[test]
    fn empty_sweep_yields_empty_dataset() {
        let ds = build_dataset(&params(), &[], 1, PALETTE[0]);
        assert!(ds.points.is_empty());
    }

    #[test]
    fn name_without_catalyst() {
        let sweep = TemperatureSweep::default().points();
        let ds = build_dataset(&params(), &sweep, 3, PALETTE[2]);
        assert_eq!(ds.name, "Set 3 (Ea: 75.0 kJ/mol)");
    }

    #[test]
    fn name_with_catalyst_short_label() {
        let p = SimulationParameters {
            catalyst_id: "catalystB".to_string(),
            ..params()
        };
        let sweep = TemperatureSweep::default().points();
        let ds = build_dataset(&p, &sweep, 2, PALETTE[1]);
        assert_eq!(ds.name, "Set 2 (Ea: 35.0 kJ/mol, Cat: B)");
    }

    #[test]
    fn unknown_catalyst_treated_as_none() {
        let p = SimulationParameters {
            catalyst_id: "platinum".to_string(),
            ..params()
        };
        let sweep = TemperatureSweep::default().points();
        let ds = build_dataset(&p, &sweep, 4, PALETTE[3]);
        assert_eq!(ds.name, "Set 4 (Ea: 75.0 kJ/mol)");
        assert_eq!(ds.params.effective_activation_energy_kj_mol, 75.0);
    }

    #[test]
    fn provenance_snapshot_matches_inputs() {
        let p = SimulationParameters {
            catalyst_id: "catalystC".to_string(),
            ..params()
        };
        let sweep = TemperatureSweep::default().points();
        let ds = build_dataset(&p, &sweep, 1, PALETTE[0]);
        assert_eq!(ds.params.activation_energy_kj_mol, 75.0);
        assert_eq!(ds.params.effective_activation_energy_kj_mol, 15.0);
        assert_eq!(ds.params.temperature_k, 298.0);
        assert_eq!(ds.params.catalyst_id, "catalystC");
    }
}
