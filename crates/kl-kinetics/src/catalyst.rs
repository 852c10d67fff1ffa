//! Fixed catalyst table.

/// Id of the "no catalyst" entry.
pub const NO_CATALYST_ID: &str = "none";

/// A catalyst entry: lowers the effective activation energy without being
/// consumed by the reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalyst {
    pub id: &'static str,
    /// Human-readable name shown in selection UIs.
    pub name: &'static str,
    /// Short label embedded in dataset names.
    pub short_label: &'static str,
    /// Activation energy reduction, kJ/mol (non-negative).
    pub reduction_kj_mol: f64,
}

impl Catalyst {
    /// True for the "no catalyst" entry.
    pub fn is_none(&self) -> bool {
        self.id == NO_CATALYST_ID
    }
}

/// The fixed catalyst set, in display order.
pub const CATALYSTS: [Catalyst; 4] = [
    Catalyst {
        id: NO_CATALYST_ID,
        name: "No Catalyst",
        short_label: "-",
        reduction_kj_mol: 0.0,
    },
    Catalyst {
        id: "catalystA",
        name: "Catalyst A (-20 kJ/mol Ea)",
        short_label: "A",
        reduction_kj_mol: 20.0,
    },
    Catalyst {
        id: "catalystB",
        name: "Catalyst B (-40 kJ/mol Ea)",
        short_label: "B",
        reduction_kj_mol: 40.0,
    },
    Catalyst {
        id: "catalystC",
        name: "Catalyst C (-60 kJ/mol Ea)",
        short_label: "C",
        reduction_kj_mol: 60.0,
    },
];

/// Look up a catalyst by id.
///
/// A miss is not an error condition: callers treat it as zero reduction.
pub fn catalyst_by_id(id: &str) -> Option<&'static Catalyst> {
    CATALYSTS.iter().find(|c| c.id == id)
}
