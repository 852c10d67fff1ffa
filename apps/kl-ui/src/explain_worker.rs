//! Background worker for terminology explanations.
//!
//! One independent, fire-and-forget request per tooltip open: a thread per
//! request, results reported back over a shared channel. A slow or failed
//! lookup only ever affects the tooltip that asked, never simulation state.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use kl_app::{FALLBACK_EXPLANATION, TermExplainer};

/// A finished lookup, fallback text already substituted on failure.
#[derive(Debug, Clone)]
pub struct ExplanationReady {
    pub term: String,
    pub text: String,
}

pub struct ExplainWorker {
    explainer: Arc<dyn TermExplainer>,
    tx: Sender<ExplanationReady>,
    rx: Receiver<ExplanationReady>,
}

impl ExplainWorker {
    pub fn new(explainer: Arc<dyn TermExplainer>) -> Self {
        let (tx, rx) = channel();
        Self { explainer, tx, rx }
    }

    /// Kick off one lookup. No cancellation: a stale reply only updates the
    /// per-term cache.
    pub fn request(&self, term: &str) {
        let explainer = Arc::clone(&self.explainer);
        let tx = self.tx.clone();
        let term = term.to_string();
        thread::spawn(move || {
            let text = match explainer.explain(&term) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(term = %term, error = %e, "explanation lookup failed");
                    FALLBACK_EXPLANATION.to_string()
                }
            };
            // receiver may be gone during shutdown, nothing to do then
            let _ = tx.send(ExplanationReady { term, text });
        });
    }

    /// Drain any completed lookups without blocking.
    pub fn poll(&self) -> Vec<ExplanationReady> {
        self.rx.try_iter().collect()
    }
}
