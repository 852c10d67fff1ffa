pub mod chart_view;
pub mod form_view;
pub mod results_view;

pub use chart_view::{ChartActions, ChartView};
pub use form_view::{FormActions, FormView};
pub use results_view::ResultsView;
