//! Store session configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::{
    ClinicStore, JsonFileSnapshot, MemorySnapshot, SnapshotStore, SqliteSnapshot, StoreResult,
};

/// Where the store keeps its persisted snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Storage {
    /// Nothing persisted; every session starts from the bundled seed.
    #[default]
    Memory,
    /// Whole-store JSON snapshot in a single file.
    JsonFile(PathBuf),
    /// Snapshot row in a SQLite database.
    Sqlite(PathBuf),
}

/// Configuration for one clinic store session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClinicConfig {
    pub storage: Storage,
    /// Fixed artificial delay applied to every store operation, in
    /// milliseconds. Models the latency of a future backend; zero disables.
    pub simulated_latency_ms: u64,
    /// Doctor credited with income for service lines without a doctor.
    pub default_doctor_id: Option<String>,
}

impl ClinicConfig {
    /// Open a store wired to the configured snapshot backend.
    pub fn open_store(&self) -> StoreResult<ClinicStore> {
        let snapshot: Box<dyn SnapshotStore> = match &self.storage {
            Storage::Memory => Box::new(MemorySnapshot),
            Storage::JsonFile(path) => Box::new(JsonFileSnapshot::new(path.clone())),
            Storage::Sqlite(path) => Box::new(SqliteSnapshot::open(path)?),
        };
        ClinicStore::open_with_config(snapshot, self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_memory_with_no_latency() {
        let config = ClinicConfig::default();
        assert_eq!(config.storage, Storage::Memory);
        assert_eq!(config.simulated_latency_ms, 0);
        assert!(config.default_doctor_id.is_none());
    }

    #[test]
    fn test_open_store_memory() {
        let store = ClinicConfig::default().open_store().unwrap();
        assert!(!store.services().is_empty());
    }

    #[test]
    fn test_config_round_trip() {
        let config = ClinicConfig {
            storage: Storage::JsonFile(PathBuf::from("/tmp/clinic.json")),
            simulated_latency_ms: 200,
            default_doctor_id: Some("doc_1001".into()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClinicConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
