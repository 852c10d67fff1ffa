//! Arrhenius rate law and derived quantities.
//!
//! Pure functions over f64; overflow and underflow follow the platform
//! exponential (results may reach 0 or infinity, neither is an error).

use crate::catalyst::catalyst_by_id;
use crate::params::{SimulationParameters, SimulationResult};
use kl_core::units::constants::R_J_PER_MOL_K;
use kl_core::units::{Temperature, in_kelvin};

/// Activation energy after applying the selected catalyst, kJ/mol.
///
/// Unknown catalyst ids fall back to zero reduction. Clamped at zero: a
/// reduction larger than the base energy cannot drive the barrier negative.
pub fn effective_activation_energy(base_ea_kj_mol: f64, catalyst_id: &str) -> f64 {
    let reduction = catalyst_by_id(catalyst_id).map_or(0.0, |c| c.reduction_kj_mol);
    (base_ea_kj_mol - reduction).max(0.0)
}

/// Arrhenius rate constant `k = A·exp(-Ea/(R·T))`, 1/s.
///
/// Temperatures at or below 0 K yield 0 without evaluating the exponential.
pub fn rate_constant(a_per_s: f64, ea_kj_mol: f64, temperature: Temperature) -> f64 {
    let t_k = in_kelvin(temperature);
    if t_k <= 0.0 {
        return 0.0;
    }
    let ea_j_mol = ea_kj_mol * 1000.0;
    a_per_s * (-ea_j_mol / (R_J_PER_MOL_K * t_k)).exp()
}

/// First-order reaction rate `rate = k·[C0]`, mol/(L·s).
///
/// Does not re-validate: negative inputs propagate unchanged.
pub fn reaction_rate(k_per_s: f64, c0_mol_l: f64) -> f64 {
    k_per_s * c0_mol_l
}

/// Evaluate one full parameter set at its own temperature.
pub fn simulate(params: &SimulationParameters) -> SimulationResult {
    let effective_ea =
        effective_activation_energy(params.activation_energy_kj_mol, &params.catalyst_id);
    let k = rate_constant(
        params.pre_exponential_factor_per_s,
        effective_ea,
        params.temperature,
    );
    let rate = reaction_rate(k, params.initial_concentration_mol_l);
    SimulationResult {
        rate_constant_per_s: k,
        reaction_rate_mol_l_s: rate,
        effective_activation_energy_kj_mol: effective_ea,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kl_core::numeric::nearly_equal_default;
    use kl_core::units::k;

    #[test]
    fn effective_ea_without_catalyst() {
        assert_eq!(effective_activation_energy(75.0, "none"), 75.0);
    }

    #[test]
    fn effective_ea_with_strong_catalyst() {
        assert_eq!(effective_activation_energy(75.0, "catalystC"), 15.0);
    }

    #[test]
    fn effective_ea_clamps_at_zero() {
        // reduction 60 undercuts base 30
        assert_eq!(effective_activation_energy(30.0, "catalystC"), 0.0);
        assert_eq!(effective_activation_energy(-10.0, "none"), 0.0);
    }

    #[test]
    fn effective_ea_unknown_catalyst_means_no_reduction() {
        assert_eq!(effective_activation_energy(75.0, "platinum"), 75.0);
    }

    #[test]
    fn rate_constant_zero_at_or_below_absolute_zero() {
        assert_eq!(rate_constant(1e10, 75.0, k(0.0)), 0.0);
        assert_eq!(rate_constant(1e10, 75.0, k(-25.0)), 0.0);
        assert_eq!(rate_constant(0.0, 0.0, k(-1.0)), 0.0);
    }

    #[test]
    fn rate_constant_room_temperature_reference() {
        let got = rate_constant(1e10, 75.0, k(298.0));
        let expected = 1e10 * (-75_000.0_f64 / (8.314 * 298.0)).exp();
        assert!(nearly_equal_default(got, expected));
        // order of magnitude sanity: ~7e-4 1/s at room temperature
        assert!(got > 1e-4 && got < 1e-3);
    }

    #[test]
    fn rate_constant_positive_for_valid_inputs() {
        let got = rate_constant(1e10, 75.0, k(450.0));
        assert!(got > 0.0);
        assert!(got.is_finite());
    }

    #[test]
    fn reaction_rate_is_exact_product() {
        assert_eq!(reaction_rate(3.5, 2.0), 7.0);
        assert_eq!(reaction_rate(0.0, 4.0), 0.0);
        // negative inputs propagate, documented behavior
        assert_eq!(reaction_rate(-1.5, 2.0), -3.0);
    }

    #[test]
    fn simulate_combines_all_three() {
        let params = SimulationParameters {
            catalyst_id: "catalystA".to_string(),
            initial_concentration_mol_l: 2.0,
            ..SimulationParameters::default()
        };
        let result = simulate(&params);
        assert_eq!(result.effective_activation_energy_kj_mol, 55.0);
        let expected_k = rate_constant(1e10, 55.0, k(298.0));
        assert_eq!(result.rate_constant_per_s, expected_k);
        assert_eq!(result.reaction_rate_mol_l_s, expected_k * 2.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalyst::CATALYSTS;
    use kl_core::units::k;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn effective_ea_stays_in_bounds(base in 0.0_f64..500.0, idx in 0usize..CATALYSTS.len()) {
            let eff = effective_activation_energy(base, CATALYSTS[idx].id);
            prop_assert!(eff >= 0.0);
            prop_assert!(eff <= base);
        }

        #[test]
        fn rate_constant_never_negative(
            a in 0.0_f64..1e12,
            ea in 0.0_f64..500.0,
            t_k in -300.0_f64..2000.0,
        ) {
            prop_assert!(rate_constant(a, ea, k(t_k)) >= 0.0);
        }

        #[test]
        fn rate_constant_zero_for_non_positive_temperature(
            a in 0.0_f64..1e12,
            ea in 0.0_f64..500.0,
            t_k in -500.0_f64..=0.0,
        ) {
            prop_assert_eq!(rate_constant(a, ea, k(t_k)), 0.0);
        }
    }
}
