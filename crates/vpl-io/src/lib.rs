//! # vpl-io: Layout Report Sinks
//!
//! Persists solved layouts for downstream consumers: the grid table and
//! summary table as CSV, and the full solution as JSON. The report formats
//! are stable interfaces; the optimization core never writes files itself.

pub mod report;

pub use report::{write_grid_csv, write_json, write_reports, write_summary_csv};
