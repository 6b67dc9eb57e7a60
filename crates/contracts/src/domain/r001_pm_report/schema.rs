use super::payload::StepPayload;
use super::steps::StepKey;
use crate::enums::lookup_kind::LookupKind;

/// Kind of editable control a step field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Select backed by a lookup set
    Lookup(LookupKind),
    /// Free text input
    Text,
    /// Numeric reading (stored as text on the wire)
    Number,
    /// Multi-line remarks
    Remarks,
}

/// One editable field of a step form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Declarative description of one wizard step.
///
/// Replaces the per-step component duplication of the original report forms:
/// a concrete step is a configuration record, not a bespoke component.
#[derive(Debug, Clone, Copy)]
pub struct StepSchema {
    pub key: StepKey,
    pub fields: &'static [FieldSpec],
    /// Optional static illustration asset shown above the form
    pub illustration: Option<&'static str>,
}

impl StepSchema {
    /// Lookup kinds this step needs, de-duplicated, in field order
    pub fn lookup_kinds(&self) -> Vec<LookupKind> {
        let mut kinds = Vec::new();
        for field in self.fields {
            if let FieldKind::Lookup(kind) = field.kind {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        kinds
    }

    pub fn has_field(&self, field_id: &str) -> bool {
        self.fields.iter().any(|f| f.id == field_id)
    }

    /// Completion predicate: every required field non-blank in `payload`
    pub fn is_complete(&self, payload: &StepPayload) -> bool {
        self.fields.iter().filter(|f| f.required).all(|f| {
            payload
                .get(f.id)
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false)
        })
    }
}

const fn lookup(id: &'static str, label: &'static str, kind: LookupKind) -> FieldSpec {
    FieldSpec {
        id,
        label,
        kind: FieldKind::Lookup(kind),
        required: true,
    }
}

const fn number(id: &'static str, label: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        id,
        label,
        kind: FieldKind::Number,
        required,
    }
}

const fn text(id: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        id,
        label,
        kind: FieldKind::Text,
        required: false,
    }
}

const fn remarks() -> FieldSpec {
    FieldSpec {
        id: "remarks",
        label: "Remarks",
        kind: FieldKind::Remarks,
        required: false,
    }
}

use LookupKind::{ResultStatus, YesNoStatus};

/// One entry per `StepKey`, in `StepKey::ALL` order
static SCHEMAS: [StepSchema; 15] = [
    StepSchema {
        key: StepKey::ServerHealth,
        fields: &[lookup("result", "Overall server condition", ResultStatus), remarks()],
        illustration: Some("/assets/pm/server_health.svg"),
    },
    StepSchema {
        key: StepKey::HardDriveHealth,
        fields: &[
            lookup("status", "SMART status", ResultStatus),
            text("faultyDrives", "Faulty drives"),
            remarks(),
        ],
        illustration: Some("/assets/pm/hard_drive.svg"),
    },
    StepSchema {
        key: StepKey::DiskUsage,
        fields: &[
            lookup("withinThreshold", "Usage within threshold", YesNoStatus),
            number("usedPercent", "Used space (%)", true),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::CpuLoad,
        fields: &[
            lookup("withinThreshold", "Load within threshold", YesNoStatus),
            number("averagePercent", "Average load (%)", true),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::MemoryUsage,
        fields: &[
            lookup("withinThreshold", "Usage within threshold", YesNoStatus),
            number("usedPercent", "Used memory (%)", true),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::RtuStatus,
        fields: &[
            lookup("allOnline", "All RTUs online", YesNoStatus),
            text("offlineUnits", "Offline units"),
            remarks(),
        ],
        illustration: Some("/assets/pm/rtu.svg"),
    },
    StepSchema {
        key: StepKey::NetworkStatus,
        fields: &[
            lookup("result", "Connectivity check", ResultStatus),
            number("packetLossPercent", "Packet loss (%)", false),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::CctvStatus,
        fields: &[
            lookup("allRecording", "All cameras recording", YesNoStatus),
            text("camerasDown", "Cameras down"),
            remarks(),
        ],
        illustration: Some("/assets/pm/cctv.svg"),
    },
    StepSchema {
        key: StepKey::UpsStatus,
        fields: &[
            lookup("result", "UPS self-test result", ResultStatus),
            lookup("batteryHealthy", "Battery healthy", YesNoStatus),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::ServerRoomTemperature,
        fields: &[
            lookup("withinRange", "Temperature within range", YesNoStatus),
            number("temperatureC", "Reading (°C)", true),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::EventLogReview,
        fields: &[
            lookup("reviewed", "Event logs reviewed", YesNoStatus),
            text("criticalEvents", "Critical events found"),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::AntivirusStatus,
        fields: &[
            lookup("definitionsCurrent", "Definitions up to date", YesNoStatus),
            lookup("lastScanResult", "Last scan result", ResultStatus),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::OsPatchLevel,
        fields: &[
            lookup("upToDate", "Patches up to date", YesNoStatus),
            number("pendingPatches", "Pending patches", false),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::TimeSync,
        fields: &[
            lookup("inSync", "Clock in sync", YesNoStatus),
            number("driftSeconds", "Drift (seconds)", false),
            remarks(),
        ],
        illustration: None,
    },
    StepSchema {
        key: StepKey::DatabaseBackup,
        fields: &[
            lookup("lastBackupResult", "Last backup result", ResultStatus),
            lookup("backupVerified", "Restore verified", YesNoStatus),
            remarks(),
        ],
        illustration: Some("/assets/pm/database_backup.svg"),
    },
];

/// Schema for one step; the table is aligned with `StepKey::ALL`
pub fn schema_for(key: StepKey) -> &'static StepSchema {
    &SCHEMAS[key.index()]
}

/// Advisory (complete, total) counts derived from aggregated form data.
/// Steps with no payload count as incomplete.
pub fn completion_summary(form_data: &super::payload::ReportFormData) -> (usize, usize) {
    let complete = StepKey::ALL
        .iter()
        .filter(|key| {
            form_data
                .get(key)
                .map(|payload| schema_for(**key).is_complete(payload))
                .unwrap_or(false)
        })
        .count();
    (complete, StepKey::ALL.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_aligned_with_step_order() {
        for (i, key) in StepKey::ALL.iter().enumerate() {
            assert_eq!(SCHEMAS[i].key, *key);
            assert_eq!(schema_for(*key).key, *key);
        }
    }

    #[test]
    fn test_field_ids_unique_per_step() {
        for schema in &SCHEMAS {
            let mut ids: Vec<_> = schema.fields.iter().map(|f| f.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), schema.fields.len(), "{:?}", schema.key);
        }
    }

    #[test]
    fn test_every_step_has_required_fields_and_remarks() {
        for schema in &SCHEMAS {
            assert!(
                schema.fields.iter().any(|f| f.required),
                "{:?} has no required field",
                schema.key
            );
            assert!(schema.has_field("remarks"), "{:?} has no remarks", schema.key);
        }
    }

    #[test]
    fn test_completion_requires_all_required_fields() {
        let schema = schema_for(StepKey::DiskUsage);
        let mut payload = StepPayload::new();
        assert!(!schema.is_complete(&payload));

        payload.set("withinThreshold", "yes");
        assert!(!schema.is_complete(&payload));

        payload.set("usedPercent", "63");
        assert!(schema.is_complete(&payload));

        // optional remarks never affect the predicate
        payload.set("remarks", "");
        assert!(schema.is_complete(&payload));

        // blanking a required field drops completion again
        payload.set("usedPercent", "  ");
        assert!(!schema.is_complete(&payload));
    }

    #[test]
    fn test_completion_summary_counts_complete_steps() {
        use crate::domain::r001_pm_report::ReportFormData;

        let mut form_data = ReportFormData::new();
        assert_eq!(completion_summary(&form_data), (0, 15));

        let mut done = StepPayload::new();
        done.set("result", "pass");
        form_data.insert(StepKey::ServerHealth, done);

        let mut partial = StepPayload::new();
        partial.set("withinThreshold", "yes");
        form_data.insert(StepKey::DiskUsage, partial);

        assert_eq!(completion_summary(&form_data), (1, 15));
    }

    #[test]
    fn test_lookup_kinds_deduplicated() {
        let schema = schema_for(StepKey::AntivirusStatus);
        assert_eq!(
            schema.lookup_kinds(),
            vec![LookupKind::YesNoStatus, LookupKind::ResultStatus]
        );
    }
}
