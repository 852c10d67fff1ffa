//! Overlay charts: reaction rate and rate constant across the sweep.

use egui_plot::{Legend, Line, Plot, PlotPoints};
use kl_results::{DatasetId, RateDataset, SeriesColor};

/// Dataset housekeeping requested from the chart panel this frame.
#[derive(Default)]
pub struct ChartActions {
    pub remove: Option<DatasetId>,
    pub clear: bool,
    pub copy_json: bool,
}

/// Which quantity the chart plots against temperature.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum ChartQuantity {
    #[default]
    ReactionRate,
    RateConstant,
}

#[derive(Default)]
pub struct ChartView {
    quantity: ChartQuantity,
}

impl ChartView {
    pub fn show(&mut self, ui: &mut egui::Ui, datasets: &[RateDataset]) -> ChartActions {
        let mut actions = ChartActions::default();

        ui.heading("Reaction Kinetics Graph");
        ui.horizontal(|ui| {
            ui.selectable_value(
                &mut self.quantity,
                ChartQuantity::ReactionRate,
                "Reaction Rate",
            );
            ui.selectable_value(
                &mut self.quantity,
                ChartQuantity::RateConstant,
                "Rate Constant (k)",
            );
        });
        ui.separator();

        if datasets.is_empty() {
            ui.label("No data to display. Add datasets from simulations.");
            return actions;
        }

        for ds in datasets {
            ui.horizontal(|ui| {
                ui.colored_label(to_color32(ds.color), "■");
                ui.label(&ds.name);
                if ui.small_button("✖").clicked() {
                    actions.remove = Some(ds.id);
                }
            });
        }
        ui.horizontal(|ui| {
            if ui.button("Clear Graph").clicked() {
                actions.clear = true;
            }
            if ui.button("Copy Data as JSON").clicked() {
                actions.copy_json = true;
            }
        });

        let y_label = match self.quantity {
            ChartQuantity::ReactionRate => "Reaction Rate (mol/L·s)",
            ChartQuantity::RateConstant => "Rate Constant (1/s)",
        };

        let mut lines = Vec::new();
        for ds in datasets {
            let points: Vec<[f64; 2]> = ds
                .points
                .iter()
                .map(|p| {
                    let y = match self.quantity {
                        ChartQuantity::ReactionRate => p.rate_mol_l_s,
                        ChartQuantity::RateConstant => p.k_per_s,
                    };
                    [p.temperature_k, y]
                })
                .collect();
            let plot_points: PlotPoints = points.into();
            lines.push(
                Line::new(plot_points)
                    .name(&ds.name)
                    .color(to_color32(ds.color)),
            );
        }

        Plot::new("kinetics_plot")
            .legend(Legend::default())
            .x_axis_label("Temperature (K)")
            .y_axis_label(y_label)
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });

        actions
    }
}

fn to_color32(color: SeriesColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
