//! Report Step Wizard UI Module
//!
//! Simplified MVVM pattern implementation:
//! - core.rs: pure state machines (wizard navigation, step form seeding)
//! - view_model.rs: ViewModel driving animated transitions over the core
//! - view.rs: Leptos components (wizard frame, generic step form unit)

pub mod core;
mod view;
mod view_model;

pub use view::ReportWizard;
pub use view_model::WizardViewModel;
