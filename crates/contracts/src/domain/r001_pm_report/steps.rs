use serde::{Deserialize, Serialize};

/// Identifier of one wizard step of the server PM report.
///
/// Declaration order is the wizard order; `ALL` exposes it as data, so
/// navigation is plain index arithmetic over the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKey {
    ServerHealth,
    HardDriveHealth,
    DiskUsage,
    CpuLoad,
    MemoryUsage,
    RtuStatus,
    NetworkStatus,
    CctvStatus,
    UpsStatus,
    ServerRoomTemperature,
    EventLogReview,
    AntivirusStatus,
    OsPatchLevel,
    TimeSync,
    DatabaseBackup,
}

impl StepKey {
    /// Fixed wizard order
    pub const ALL: [StepKey; 15] = [
        StepKey::ServerHealth,
        StepKey::HardDriveHealth,
        StepKey::DiskUsage,
        StepKey::CpuLoad,
        StepKey::MemoryUsage,
        StepKey::RtuStatus,
        StepKey::NetworkStatus,
        StepKey::CctvStatus,
        StepKey::UpsStatus,
        StepKey::ServerRoomTemperature,
        StepKey::EventLogReview,
        StepKey::AntivirusStatus,
        StepKey::OsPatchLevel,
        StepKey::TimeSync,
        StepKey::DatabaseBackup,
    ];

    /// Wire code, also the key inside the aggregated formData object
    pub fn code(&self) -> &'static str {
        match self {
            StepKey::ServerHealth => "serverHealth",
            StepKey::HardDriveHealth => "hardDriveHealth",
            StepKey::DiskUsage => "diskUsage",
            StepKey::CpuLoad => "cpuLoad",
            StepKey::MemoryUsage => "memoryUsage",
            StepKey::RtuStatus => "rtuStatus",
            StepKey::NetworkStatus => "networkStatus",
            StepKey::CctvStatus => "cctvStatus",
            StepKey::UpsStatus => "upsStatus",
            StepKey::ServerRoomTemperature => "serverRoomTemperature",
            StepKey::EventLogReview => "eventLogReview",
            StepKey::AntivirusStatus => "antivirusStatus",
            StepKey::OsPatchLevel => "osPatchLevel",
            StepKey::TimeSync => "timeSync",
            StepKey::DatabaseBackup => "databaseBackup",
        }
    }

    /// Human-readable step title
    pub fn title(&self) -> &'static str {
        match self {
            StepKey::ServerHealth => "Server Health",
            StepKey::HardDriveHealth => "Hard Drive Health",
            StepKey::DiskUsage => "Disk Usage",
            StepKey::CpuLoad => "CPU Load",
            StepKey::MemoryUsage => "Memory Usage",
            StepKey::RtuStatus => "RTU Status",
            StepKey::NetworkStatus => "Network Status",
            StepKey::CctvStatus => "CCTV Status",
            StepKey::UpsStatus => "UPS Status",
            StepKey::ServerRoomTemperature => "Server Room Temperature",
            StepKey::EventLogReview => "Event Log Review",
            StepKey::AntivirusStatus => "Antivirus Status",
            StepKey::OsPatchLevel => "OS Patch Level",
            StepKey::TimeSync => "Time Synchronization",
            StepKey::DatabaseBackup => "Database Backup",
        }
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.code() == code)
    }

    /// Position within the wizard order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|k| k == self)
            .expect("StepKey missing from ALL")
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.index() + 1 == Self::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_boundaries() {
        assert_eq!(StepKey::ALL.len(), 15);
        assert_eq!(StepKey::ALL[0], StepKey::ServerHealth);
        assert_eq!(StepKey::ALL[14], StepKey::DatabaseBackup);
        assert!(StepKey::ServerHealth.is_first());
        assert!(StepKey::DatabaseBackup.is_last());
    }

    #[test]
    fn test_code_roundtrip() {
        for key in StepKey::ALL {
            assert_eq!(StepKey::from_code(key.code()), Some(key));
        }
        assert_eq!(StepKey::from_code("noSuchStep"), None);
    }

    #[test]
    fn test_serde_matches_wire_code() {
        for key in StepKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.code()));
            let back: StepKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn test_ord_follows_wizard_order() {
        // BTreeMap<StepKey, _> iteration must follow the wizard order
        for pair in StepKey::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
