use serde::{Deserialize, Serialize};

/// Enumerated lookup sets served by the reference-data endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LookupKind {
    YesNoStatus,
    ResultStatus,
}

impl LookupKind {
    /// REST resource name under /api/lookups/
    pub fn resource(&self) -> &'static str {
        match self {
            LookupKind::YesNoStatus => "yes-no-status",
            LookupKind::ResultStatus => "result-status",
        }
    }

    /// Human-readable name of the lookup set
    pub fn display_name(&self) -> &'static str {
        match self {
            LookupKind::YesNoStatus => "Yes/No status",
            LookupKind::ResultStatus => "Result status",
        }
    }

    /// All lookup kinds
    pub fn all() -> Vec<LookupKind> {
        vec![LookupKind::YesNoStatus, LookupKind::ResultStatus]
    }

    /// Parse from the REST resource name
    pub fn from_resource(resource: &str) -> Option<Self> {
        match resource {
            "yes-no-status" => Some(LookupKind::YesNoStatus),
            "result-status" => Some(LookupKind::ResultStatus),
            _ => None,
        }
    }
}

/// One selectable entry of a lookup set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_roundtrip() {
        for kind in LookupKind::all() {
            assert_eq!(LookupKind::from_resource(kind.resource()), Some(kind));
        }
        assert_eq!(LookupKind::from_resource("unknown"), None);
    }
}
