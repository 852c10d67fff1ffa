//! Current-run results panel.

use kl_kinetics::SimulationResult;

use crate::explain_worker::ExplainWorker;
use crate::tooltip::TermTooltips;

pub struct ResultsView;

impl ResultsView {
    pub fn show(
        ui: &mut egui::Ui,
        result: Option<&SimulationResult>,
        worker: &ExplainWorker,
        tooltips: &mut TermTooltips,
    ) {
        ui.heading("Simulation Results");
        ui.separator();

        let Some(result) = result else {
            ui.label("Run a simulation to see results here.");
            return;
        };

        result_row(
            ui,
            worker,
            tooltips,
            "Rate Constant (k)",
            "Rate Constant",
            format!("{:.3e} 1/s", result.rate_constant_per_s),
        );
        result_row(
            ui,
            worker,
            tooltips,
            "Reaction Rate",
            "Reaction Rate",
            format!("{:.3e} mol/(L·s)", result.reaction_rate_mol_l_s),
        );
        result_row(
            ui,
            worker,
            tooltips,
            "Effective Activation Energy (Ea)",
            "Effective Activation Energy",
            format!("{:.2} kJ/mol", result.effective_activation_energy_kj_mol),
        );
    }
}

fn result_row(
    ui: &mut egui::Ui,
    worker: &ExplainWorker,
    tooltips: &mut TermTooltips,
    label: &str,
    term: &str,
    value: String,
) {
    ui.horizontal(|ui| {
        let response = ui.label(label);
        tooltips.attach(worker, response, term);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.strong(value);
        });
    });
}
