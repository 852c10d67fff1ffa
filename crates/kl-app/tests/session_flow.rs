//! Integration test: the full run / add-to-graph flow a frontend drives.
//!
//! Exercises the session the way the UI does: run with varying parameters,
//! stack comparison datasets up to the cap, hit the rejection, prune, and
//! keep going.

use kl_app::{MAX_DATASETS, SessionError, SimulationSession};
use kl_core::units::k;
use kl_kinetics::{CATALYSTS, SimulationParameters};

fn params_with_catalyst(id: &str) -> SimulationParameters {
    SimulationParameters {
        catalyst_id: id.to_string(),
        ..SimulationParameters::default()
    }
}

#[test]
fn typical_comparison_workflow() {
    let mut session = SimulationSession::new();

    // single run first, as the form's Run button does
    let result = session.run(&SimulationParameters::default());
    assert!(result.rate_constant_per_s > 0.0);
    assert_eq!(result.effective_activation_energy_kj_mol, 75.0);

    // one dataset per catalyst: 4 entries, ids 1..=4
    for catalyst in CATALYSTS {
        let ds = session.add_to_graph(&params_with_catalyst(catalyst.id)).unwrap();
        assert_eq!(ds.points.len(), 21);
    }
    assert_eq!(session.datasets().len(), 4);

    // a hotter uncatalyzed variant fills the fifth slot
    let hot = SimulationParameters {
        temperature: k(400.0),
        ..SimulationParameters::default()
    };
    session.add_to_graph(&hot).unwrap();
    assert_eq!(session.datasets().len(), MAX_DATASETS);

    // the sixth is rejected and nothing changes
    let err = session.add_to_graph(&hot).unwrap_err();
    assert!(matches!(err, SessionError::DatasetLimitReached { .. }));
    assert_eq!(session.datasets().len(), MAX_DATASETS);

    // pruning one frees a slot; the new dataset continues the id sequence
    assert!(session.remove_dataset(3));
    let ds = session.add_to_graph(&hot).unwrap();
    assert_eq!(ds.id, 6);
    assert_eq!(session.datasets().len(), MAX_DATASETS);
}

#[test]
fn stronger_catalysts_sort_lower_effective_ea() {
    let mut session = SimulationSession::new();
    for catalyst in CATALYSTS {
        session.add_to_graph(&params_with_catalyst(catalyst.id)).unwrap();
    }

    let eas: Vec<f64> = session
        .datasets()
        .iter()
        .map(|d| d.params.effective_activation_energy_kj_mol)
        .collect();
    assert_eq!(eas, vec![75.0, 55.0, 35.0, 15.0]);
}

#[test]
fn datasets_survive_runs_untouched() {
    let mut session = SimulationSession::new();
    session.add_to_graph(&SimulationParameters::default()).unwrap();
    let name_before = session.datasets()[0].name.clone();

    // running simulations does not touch the comparison collection
    session.run(&params_with_catalyst("catalystC"));
    session.run(&SimulationParameters::default());

    assert_eq!(session.datasets().len(), 1);
    assert_eq!(session.datasets()[0].name, name_before);
}
