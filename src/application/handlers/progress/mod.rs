//! Progress report handlers.

mod get_progress_report;

pub use get_progress_report::{GetProgressReportHandler, GetProgressReportQuery, ProgressReport};
