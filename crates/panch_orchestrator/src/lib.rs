//! Monthly Orchestrator: composes the event detectors over a padded scan
//! window and reduces the result down to exactly what a caller asked for —
//! a calendar month, a forward-looking horizon, or a raw longitude series.

pub mod error;
pub mod horizon;
pub mod monthly;
pub mod render;
pub mod timeseries;
pub mod window;

pub use error::OrchestratorError;
pub use horizon::{HorizonRecord, compute_horizon};
pub use monthly::compute_monthly;
pub use render::{
    AscendantFlipWire, CombustionWindowWire, HorizonRecordWire, MonthRecordWire, MoonMonthlyRowsWire,
    NakshatraChangeWire, RetrogradeWindowWire, SignChangeWire, VelocityExtremumWire, format_local,
    render_horizon_record, render_month_record,
};
pub use timeseries::{LongitudeSample, compute_planetary_timeseries};
