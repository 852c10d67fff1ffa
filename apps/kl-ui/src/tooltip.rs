//! Per-term tooltip cache.
//!
//! Each term resolves once per app run: a lookup is requested on first
//! hover, the tooltip shows a loading hint while the worker runs, then the
//! cached text forever after. Re-hovering re-triggers the lookup only when
//! nothing was cached for the term.

use std::collections::HashMap;

use crate::explain_worker::{ExplainWorker, ExplanationReady};

#[derive(Debug, Clone, PartialEq)]
enum TooltipState {
    Loading,
    Ready(String),
}

#[derive(Default)]
pub struct TermTooltips {
    states: HashMap<String, TooltipState>,
}

impl TermTooltips {
    /// Absorb finished lookups from the worker.
    pub fn absorb(&mut self, ready: Vec<ExplanationReady>) {
        for item in ready {
            self.states
                .insert(item.term, TooltipState::Ready(item.text));
        }
    }

    /// Attach a hover tooltip for `term` to `response`, requesting the
    /// explanation the first time the widget is hovered.
    pub fn attach(&mut self, worker: &ExplainWorker, response: egui::Response, term: &str) {
        if response.hovered() && !self.states.contains_key(term) {
            worker.request(term);
            self.states.insert(term.to_string(), TooltipState::Loading);
        }
        let state = self.states.get(term).cloned();
        response.on_hover_ui(|ui| {
            ui.set_max_width(260.0);
            match state {
                Some(TooltipState::Ready(text)) => {
                    ui.label(text);
                }
                Some(TooltipState::Loading) => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading explanation...");
                    });
                }
                None => {
                    ui.label("Hover to see explanation.");
                }
            }
        });
    }
}
