//! PM Report Page UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch draft, save draft, submit report)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (report metadata + embedded wizard)

mod model;
mod view;
mod view_model;

pub use view::PmReportPage;
pub use view_model::PmReportViewModel;
