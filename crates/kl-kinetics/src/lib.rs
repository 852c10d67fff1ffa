//! Arrhenius kinetics core for kineticslab.
//!
//! Provides:
//! - Fixed catalyst table with graceful-miss lookup
//! - Pure Arrhenius calculator (rate constant, first-order reaction rate)
//! - Linear temperature sweep generator shared by overlay charts
//!
//! Everything here is synchronous, deterministic, and total: degenerate
//! inputs are defined away (zero rate constant at or below 0 K, zero
//! reduction for unknown catalyst ids) instead of surfaced as errors.

pub mod arrhenius;
pub mod catalyst;
pub mod params;
pub mod sweep;

// Re-exports for public API
pub use arrhenius::{effective_activation_energy, rate_constant, reaction_rate, simulate};
pub use catalyst::{CATALYSTS, Catalyst, NO_CATALYST_ID, catalyst_by_id};
pub use params::{SimulationParameters, SimulationResult};
pub use sweep::TemperatureSweep;
