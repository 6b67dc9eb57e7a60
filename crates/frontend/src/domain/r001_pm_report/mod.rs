//! Server preventive-maintenance (PM) inspection report UI
pub mod ui;
