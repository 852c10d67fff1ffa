//! Plot-facing datasets for kineticslab.
//!
//! Everything overlay charts need: plain-f64, serde-friendly snapshots of
//! the kinetics sweep, a fixed color palette, and the dataset builder.

pub mod builder;
pub mod palette;
pub mod types;

pub use builder::build_dataset;
pub use palette::{PALETTE, SeriesColor, color_for_sequence};
pub use types::{DatasetId, DatasetParams, RateDataset, RatePoint};
