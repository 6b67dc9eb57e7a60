use super::payload::ReportFormData;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server PM report draft, as loaded from and saved to the report service.
///
/// `form_data` holds whatever each wizard step last reported; persistence is
/// a plain pass-through, no validation happens at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmReportDraft {
    pub id: Uuid,
    pub site_name: String,
    pub engineer: String,
    pub report_date: NaiveDate,
    #[serde(default)]
    pub form_data: ReportFormData,
}

impl PmReportDraft {
    /// Fresh draft for a new report
    pub fn new(report_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            site_name: String::new(),
            engineer: String::new(),
            report_date,
            form_data: ReportFormData::new(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("serialize PM report draft")
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("parse PM report draft")
    }
}

/// Final submission payload sent when the wizard completes.
///
/// The completion counters are advisory: the service receives the report
/// whether or not every step was filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PmReportSubmission {
    pub report_id: Uuid,
    pub site_name: String,
    pub engineer: String,
    pub report_date: NaiveDate,
    pub form_data: ReportFormData,
    pub steps_complete: usize,
    pub steps_total: usize,
}

impl PmReportSubmission {
    /// Build the submission from a draft and the wizard's aggregated output
    pub fn from_draft(
        draft: &PmReportDraft,
        form_data: ReportFormData,
        steps_complete: usize,
        steps_total: usize,
    ) -> Self {
        Self {
            report_id: draft.id,
            site_name: draft.site_name.clone(),
            engineer: draft.engineer.clone(),
            report_date: draft.report_date,
            form_data,
            steps_complete,
            steps_total,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("serialize PM report submission")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::r001_pm_report::{StepKey, StepPayload};

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    #[test]
    fn test_draft_json_roundtrip() {
        let mut draft = PmReportDraft::new(sample_date());
        draft.site_name = "Pumping Station 7".to_string();
        draft.engineer = "A. Tan".to_string();
        let mut payload = StepPayload::new();
        payload.set("result", "healthy");
        draft.form_data.insert(StepKey::ServerHealth, payload);

        let json = draft.to_json().unwrap();
        // camelCase wire format
        assert!(json.contains("\"siteName\":\"Pumping Station 7\""));
        assert!(json.contains("\"reportDate\":\"2026-08-25\""));
        assert!(json.contains("\"serverHealth\""));

        let back = PmReportDraft::from_json(&json).unwrap();
        assert_eq!(back.id, draft.id);
        assert_eq!(back.form_data.len(), 1);
    }

    #[test]
    fn test_draft_form_data_defaults_to_empty() {
        let json = format!(
            r#"{{"id":"{}","siteName":"s","engineer":"e","reportDate":"2026-08-25"}}"#,
            Uuid::new_v4()
        );
        let draft = PmReportDraft::from_json(&json).unwrap();
        assert!(draft.form_data.is_empty());
    }

    #[test]
    fn test_submission_carries_advisory_counters() {
        let draft = PmReportDraft::new(sample_date());
        let submission =
            PmReportSubmission::from_draft(&draft, ReportFormData::new(), 12, 15);
        assert_eq!(submission.report_id, draft.id);
        assert_eq!(submission.steps_complete, 12);
        assert_eq!(submission.steps_total, 15);
        let json = submission.to_json().unwrap();
        assert!(json.contains("\"stepsComplete\":12"));
    }
}
