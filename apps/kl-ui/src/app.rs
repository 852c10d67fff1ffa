//! Top-level egui application state.

use std::sync::Arc;

use kl_app::{GlossaryExplainer, SimulationSession};
use kl_kinetics::SimulationParameters;

use crate::explain_worker::ExplainWorker;
use crate::tooltip::TermTooltips;
use crate::views::{ChartView, FormView, ResultsView};

pub struct KineticsLabApp {
    session: SimulationSession,
    form: FormView,
    chart_view: ChartView,
    tooltips: TermTooltips,
    explain_worker: ExplainWorker,
    status: Option<String>,
}

impl KineticsLabApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: SimulationSession::new(),
            form: FormView::default(),
            chart_view: ChartView::default(),
            tooltips: TermTooltips::default(),
            explain_worker: ExplainWorker::new(Arc::new(GlossaryExplainer)),
            status: None,
        }
    }

    fn run_clicked(&mut self, params: SimulationParameters) {
        let result = self.session.run(&params);
        self.status = Some(format!(
            "Simulation complete: k = {:.3e} 1/s, rate = {:.3e} mol/(L·s)",
            result.rate_constant_per_s, result.reaction_rate_mol_l_s
        ));
    }

    fn add_to_graph_clicked(&mut self, params: SimulationParameters) {
        match self.session.add_to_graph(&params) {
            Ok(dataset) => {
                self.status = Some(format!("{} added to graph", dataset.name));
            }
            Err(err) => {
                self.status = Some(err.to_string());
            }
        }
    }
}

impl eframe::App for KineticsLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // absorb finished explanation lookups before drawing tooltips
        let ready = self.explain_worker.poll();
        if !ready.is_empty() {
            self.tooltips.absorb(ready);
            ctx.request_repaint();
        }

        egui::SidePanel::left("parameters")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.heading("Simulation Parameters");
                ui.separator();
                let actions = self.form.show(ui, &self.explain_worker, &mut self.tooltips);
                if let Some(params) = actions.run {
                    self.run_clicked(params);
                }
                if let Some(params) = actions.add_to_graph {
                    self.add_to_graph_clicked(params);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(status) = &self.status {
                ui.label(status.clone());
                ui.separator();
            }

            ResultsView::show(
                ui,
                self.session.current_result(),
                &self.explain_worker,
                &mut self.tooltips,
            );
            ui.separator();

            let actions = self.chart_view.show(ui, self.session.datasets());
            if let Some(id) = actions.remove {
                if self.session.remove_dataset(id) {
                    self.status = Some(format!("Dataset {id} removed from graph"));
                }
            }
            if actions.clear {
                self.session.clear_datasets();
                self.status = Some("Graph cleared".to_string());
            }
            if actions.copy_json {
                match serde_json::to_string_pretty(self.session.datasets()) {
                    Ok(json) => {
                        ctx.output_mut(|o| o.copied_text = json);
                        self.status = Some("Datasets copied to clipboard as JSON".to_string());
                    }
                    Err(e) => {
                        self.status = Some(format!("Export failed: {e}"));
                    }
                }
            }
        });
    }
}
