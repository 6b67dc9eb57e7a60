//! Server preventive-maintenance (PM) inspection report.
//!
//! The report is filled in through a linear step wizard; each step is
//! described declaratively by a `StepSchema` and produces one `StepPayload`
//! keyed by its `StepKey` in the aggregated `ReportFormData`.

pub mod payload;
pub mod report;
pub mod schema;
pub mod steps;

pub use payload::{ReportFormData, StepPayload};
pub use report::{PmReportDraft, PmReportSubmission};
pub use schema::{completion_summary, schema_for, FieldKind, FieldSpec, StepSchema};
pub use steps::StepKey;
