//! Term-explanation boundary.
//!
//! Tooltip assistance is an external collaborator behind a narrow trait:
//! given a term, produce a short explanation, or fail. Callers recover from
//! any failure by substituting `FALLBACK_EXPLANATION`; a failed or slow
//! lookup never blocks or corrupts simulation state.

use crate::error::ExplainError;

/// Fixed message shown when no explanation could be produced.
pub const FALLBACK_EXPLANATION: &str = "Could not load explanation for this term.";

/// Black-box explanation provider.
///
/// Implementations may be slow (remote services); frontends call them from
/// a background worker, one independent request per tooltip.
pub trait TermExplainer: Send + Sync {
    fn explain(&self, term: &str) -> Result<String, ExplainError>;
}

/// Offline explainer backed by a built-in glossary of the terms the UI
/// links. Unknown terms fail, which callers render as the fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlossaryExplainer;

const GLOSSARY: &[(&str, &str)] = &[
    (
        "Arrhenius Equation",
        "k = A·exp(-Ea/(R·T)): relates the rate constant of a reaction to \
         temperature and activation energy.",
    ),
    (
        "Rate Constant",
        "Proportionality factor k in the rate law; for a first-order \
         reaction its units are 1/s.",
    ),
    (
        "Reaction Rate",
        "Speed at which reactant is consumed, mol/(L·s); first order means \
         it is directly proportional to the reactant concentration.",
    ),
    (
        "Activation Energy",
        "Energy barrier (kJ/mol) a reaction must overcome before it can \
         proceed.",
    ),
    (
        "Effective Activation Energy",
        "Activation energy after subtracting the catalyst reduction, \
         clamped at zero.",
    ),
    (
        "Pre-exponential Factor",
        "Frequency factor A in the Arrhenius law: how often molecules \
         collide in the right orientation, 1/s for first order.",
    ),
    (
        "Temperature",
        "Absolute temperature in kelvin; higher temperature exponentially \
         increases the rate constant.",
    ),
    (
        "Initial Concentration",
        "Starting reactant concentration in mol/L; the first-order rate is \
         proportional to it.",
    ),
    (
        "Catalyst",
        "Agent that lowers the effective activation energy without being \
         consumed by the reaction.",
    ),
    (
        "First-order Reaction",
        "Reaction whose rate is directly proportional to a single reactant \
         concentration.",
    ),
];

impl TermExplainer for GlossaryExplainer {
    fn explain(&self, term: &str) -> Result<String, ExplainError> {
        GLOSSARY
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(term))
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| ExplainError::UnknownTerm {
                term: term.to_string(),
            })
    }
}
