//! Parameter entry form.
//!
//! Owns the editable field values and validates them before either action
//! is enabled; the session downstream trusts that validated input.

use kl_core::numeric::ensure_finite;
use kl_core::units::{in_kelvin, k};
use kl_kinetics::{CATALYSTS, SimulationParameters, catalyst_by_id};

use crate::explain_worker::ExplainWorker;
use crate::tooltip::TermTooltips;

/// Buttons pressed this frame, carrying the validated parameters.
#[derive(Default)]
pub struct FormActions {
    pub run: Option<SimulationParameters>,
    pub add_to_graph: Option<SimulationParameters>,
}

/// Editable form state; starts from the room-temperature defaults.
pub struct FormView {
    pre_exponential_factor_per_s: f64,
    activation_energy_kj_mol: f64,
    temperature_k: f64,
    initial_concentration_mol_l: f64,
    catalyst_id: String,
}

impl Default for FormView {
    fn default() -> Self {
        let defaults = SimulationParameters::default();
        Self {
            pre_exponential_factor_per_s: defaults.pre_exponential_factor_per_s,
            activation_energy_kj_mol: defaults.activation_energy_kj_mol,
            temperature_k: in_kelvin(defaults.temperature),
            initial_concentration_mol_l: defaults.initial_concentration_mol_l,
            catalyst_id: defaults.catalyst_id,
        }
    }
}

impl FormView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        worker: &ExplainWorker,
        tooltips: &mut TermTooltips,
    ) -> FormActions {
        let mut actions = FormActions::default();

        numeric_row(
            ui,
            worker,
            tooltips,
            "Pre-exponential Factor (A), 1/s",
            "Pre-exponential Factor",
            &mut self.pre_exponential_factor_per_s,
            1e8,
        );
        numeric_row(
            ui,
            worker,
            tooltips,
            "Activation Energy (Ea), kJ/mol",
            "Activation Energy",
            &mut self.activation_energy_kj_mol,
            1.0,
        );
        numeric_row(
            ui,
            worker,
            tooltips,
            "Temperature (T), K",
            "Temperature",
            &mut self.temperature_k,
            1.0,
        );
        numeric_row(
            ui,
            worker,
            tooltips,
            "Initial Concentration [C0], mol/L",
            "Initial Concentration",
            &mut self.initial_concentration_mol_l,
            0.1,
        );

        let response = ui.label("Catalyst");
        tooltips.attach(worker, response, "Catalyst");
        egui::ComboBox::from_id_salt("catalyst_selector")
            .width(240.0)
            .selected_text(selected_catalyst_name(&self.catalyst_id))
            .show_ui(ui, |ui| {
                for catalyst in &CATALYSTS {
                    ui.selectable_value(
                        &mut self.catalyst_id,
                        catalyst.id.to_string(),
                        catalyst.name,
                    );
                }
            });

        let errors = self.validation_errors();
        for error in &errors {
            ui.colored_label(egui::Color32::RED, *error);
        }

        ui.separator();
        let valid = errors.is_empty();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(valid, egui::Button::new("Run Simulation"))
                .clicked()
            {
                actions.run = Some(self.params());
            }
            if ui
                .add_enabled(valid, egui::Button::new("Add to Graph"))
                .clicked()
            {
                actions.add_to_graph = Some(self.params());
            }
        });

        actions
    }

    /// Validation messages for the current values; empty when submittable.
    fn validation_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if ensure_finite(self.pre_exponential_factor_per_s, "pre-exponential factor").is_err()
            || self.pre_exponential_factor_per_s <= 0.0
        {
            errors.push("Pre-exponential factor must be positive");
        }
        if ensure_finite(self.activation_energy_kj_mol, "activation energy").is_err()
            || self.activation_energy_kj_mol < 0.0
        {
            errors.push("Activation energy cannot be negative");
        }
        if ensure_finite(self.temperature_k, "temperature").is_err() || self.temperature_k <= 0.0 {
            errors.push("Temperature must be above absolute zero (0 K)");
        }
        if ensure_finite(self.initial_concentration_mol_l, "initial concentration").is_err()
            || self.initial_concentration_mol_l < 0.0
        {
            errors.push("Concentration cannot be negative");
        }
        errors
    }

    fn params(&self) -> SimulationParameters {
        SimulationParameters {
            pre_exponential_factor_per_s: self.pre_exponential_factor_per_s,
            activation_energy_kj_mol: self.activation_energy_kj_mol,
            temperature: k(self.temperature_k),
            initial_concentration_mol_l: self.initial_concentration_mol_l,
            catalyst_id: self.catalyst_id.clone(),
        }
    }
}

fn numeric_row(
    ui: &mut egui::Ui,
    worker: &ExplainWorker,
    tooltips: &mut TermTooltips,
    label: &str,
    term: &str,
    value: &mut f64,
    speed: f64,
) {
    ui.horizontal(|ui| {
        let response = ui.label(label);
        tooltips.attach(worker, response, term);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::DragValue::new(value).speed(speed));
        });
    });
}

fn selected_catalyst_name(id: &str) -> &'static str {
    catalyst_by_id(id).map_or("No Catalyst", |c| c.name)
}
