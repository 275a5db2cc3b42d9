//! Pluggable snapshot persistence for the clinic store.
//!
//! Every mutation serializes the entire store. Concurrent writers over one
//! backend (e.g. two sessions sharing a file) race with last-write-wins
//! semantics; there is no conflict detection.

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use super::{ClinicDb, StoreResult};

/// Storage key mirrored from the browser-local persisted layout.
pub const SNAPSHOT_KEY: &str = "clinic_db_mock";

/// A persistence strategy for the whole-store snapshot.
pub trait SnapshotStore {
    /// Read the persisted snapshot, if any. Unparseable payloads are
    /// treated as absent so the caller falls back to the seed.
    fn load(&self) -> StoreResult<Option<ClinicDb>>;

    /// Overwrite the persisted snapshot.
    fn save(&self, db: &ClinicDb) -> StoreResult<()>;
}

/// Keeps nothing: every session starts from the bundled seed.
pub struct MemorySnapshot;

impl SnapshotStore for MemorySnapshot {
    fn load(&self) -> StoreResult<Option<ClinicDb>> {
        Ok(None)
    }

    fn save(&self, _db: &ClinicDb) -> StoreResult<()> {
        Ok(())
    }
}

/// Whole-store JSON snapshot in a single file.
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileSnapshot {
    fn load(&self) -> StoreResult<Option<ClinicDb>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(db) => Ok(Some(db)),
            Err(e) => {
                tracing::warn!("persisted snapshot unparseable, ignoring: {e}");
                Ok(None)
            }
        }
    }

    fn save(&self, db: &ClinicDb) -> StoreResult<()> {
        fs::write(&self.path, serde_json::to_string(db)?)?;
        Ok(())
    }
}

/// Snapshot row in a SQLite database, stored under [`SNAPSHOT_KEY`].
pub struct SqliteSnapshot {
    conn: Connection,
}

/// Snapshot table schema.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS snapshots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

impl SqliteSnapshot {
    /// Open a snapshot database at the given path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// In-memory snapshot database (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl SnapshotStore for SqliteSnapshot {
    fn load(&self) -> StoreResult<Option<ClinicDb>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        match raw {
            None => Ok(None),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(db) => Ok(Some(db)),
                Err(e) => {
                    tracing::warn!("persisted snapshot unparseable, ignoring: {e}");
                    Ok(None)
                }
            },
        }
    }

    fn save(&self, db: &ClinicDb) -> StoreResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO snapshots (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![SNAPSHOT_KEY, serde_json::to_string(db)?],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::District;

    fn sample_db() -> ClinicDb {
        ClinicDb {
            districts: vec![District {
                id: "dist_1".into(),
                name: "Yunusabad".into(),
            }],
            ..ClinicDb::default()
        }
    }

    #[test]
    fn test_memory_snapshot_keeps_nothing() {
        let snapshot = MemorySnapshot;
        snapshot.save(&sample_db()).unwrap();
        assert!(snapshot.load().unwrap().is_none());
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = JsonFileSnapshot::new(dir.path().join("clinic.json"));

        assert!(snapshot.load().unwrap().is_none());

        let db = sample_db();
        snapshot.save(&db).unwrap();
        assert_eq!(snapshot.load().unwrap(), Some(db));
    }

    #[test]
    fn test_json_file_unparseable_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinic.json");
        fs::write(&path, "{not json").unwrap();

        let snapshot = JsonFileSnapshot::new(path);
        assert!(snapshot.load().unwrap().is_none());
    }

    #[test]
    fn test_sqlite_round_trip() {
        let snapshot = SqliteSnapshot::open_in_memory().unwrap();

        assert!(snapshot.load().unwrap().is_none());

        let db = sample_db();
        snapshot.save(&db).unwrap();
        assert_eq!(snapshot.load().unwrap(), Some(db.clone()));

        // Saving again overwrites the single row.
        let mut updated = db;
        updated.districts[0].name = "Chilanzar".into();
        snapshot.save(&updated).unwrap();
        assert_eq!(snapshot.load().unwrap(), Some(updated));
    }

    #[test]
    fn test_sqlite_unparseable_is_treated_as_absent() {
        let snapshot = SqliteSnapshot::open_in_memory().unwrap();
        snapshot
            .conn
            .execute(
                "INSERT INTO snapshots (key, value) VALUES (?1, ?2)",
                params![SNAPSHOT_KEY, "{not json"],
            )
            .unwrap();
        assert!(snapshot.load().unwrap().is_none());
    }
}
