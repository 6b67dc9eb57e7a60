use super::model;
use chrono::NaiveDate;
use contracts::domain::r001_pm_report::{PmReportDraft, PmReportSubmission, ReportFormData};
use leptos::prelude::*;

/// ViewModel for the PM report page
#[derive(Clone, Copy)]
pub struct PmReportViewModel {
    pub draft: RwSignal<PmReportDraft>,
    /// True once the draft (or a fresh default) is ready to seed the wizard
    pub loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub submitted: RwSignal<bool>,
}

/// Today's date from the browser clock
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date() as u32,
    )
    .unwrap_or_default()
}

impl PmReportViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(PmReportDraft::new(today())),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            submitted: RwSignal::new(false),
        }
    }

    /// Load the draft from the server if an id is present; otherwise the
    /// fresh default draft is used as-is
    pub fn load_if_needed(&self, id: Option<String>) {
        let draft = self.draft;
        let loaded = self.loaded;
        let error = self.error;
        match id {
            Some(existing_id) => {
                wasm_bindgen_futures::spawn_local(async move {
                    match model::fetch_draft(existing_id).await {
                        Ok(existing) => draft.set(existing),
                        Err(e) => error.set(Some(format!("Failed to load report: {}", e))),
                    }
                    loaded.set(true);
                });
            }
            None => loaded.set(true),
        }
    }

    // Metadata fields live on the page, outside any wizard step

    pub fn set_site_name(&self, value: String) {
        self.draft.update(|d| d.site_name = value);
    }

    pub fn set_engineer(&self, value: String) {
        self.draft.update(|d| d.engineer = value);
    }

    pub fn set_report_date(&self, value: String) {
        if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            self.draft.update(|d| d.report_date = date);
        }
    }

    /// Persist the draft with the wizard's current aggregate
    pub fn save_command(&self, form_data: ReportFormData) {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);
        self.draft.update(|d| d.form_data = form_data);

        let current = self.draft.get_untracked();
        let saving = self.saving;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_draft(&current).await {
                Ok(id) => log::debug!("PM report draft {} saved", id),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }

    /// Send the final report when the wizard completes.
    ///
    /// The completion counters are advisory: an incomplete report is logged
    /// and submitted anyway.
    pub fn submit_command(
        &self,
        form_data: ReportFormData,
        steps_complete: usize,
        steps_total: usize,
    ) {
        let current = self.draft.get_untracked();
        if steps_complete < steps_total {
            log::debug!(
                "submitting PM report {} with {}/{} steps complete",
                current.id,
                steps_complete,
                steps_total
            );
        }
        let submission =
            PmReportSubmission::from_draft(&current, form_data, steps_complete, steps_total);

        let error = self.error;
        let submitted = self.submitted;
        wasm_bindgen_futures::spawn_local(async move {
            match model::submit_report(&submission).await {
                Ok(()) => submitted.set(true),
                Err(e) => error.set(Some(format!("Submission failed: {}", e))),
            }
        });
    }
}
