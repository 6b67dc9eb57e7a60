use super::steps::StepKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One step's form values, keyed by schema field id.
///
/// Opaque to the wizard controller: a step replaces its entry wholesale on
/// every edit, never with a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepPayload(BTreeMap<String, String>);

impl StepPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(|v| v.as_str())
    }

    /// Value for prop binding: cloned, empty string when absent
    pub fn value(&self, field_id: &str) -> String {
        self.0.get(field_id).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, field_id: &str, value: impl Into<String>) {
        self.0.insert(field_id.to_string(), value.into());
    }

    /// True when at least one field holds a non-blank value
    pub fn has_data(&self) -> bool {
        self.0.values().any(|v| !v.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for StepPayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregated wizard output: one payload per step that reported data.
///
/// Keys are always a subset of `StepKey::ALL`; an entry is written only by
/// its own step's form unit (relayed through the wizard controller).
pub type ReportFormData = BTreeMap<StepKey, StepPayload>;
