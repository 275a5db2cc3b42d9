//! Bundled seed snapshot, used when no persisted snapshot exists.

use crate::store::ClinicDb;

const SEED_JSON: &str = include_str!("../data/seed.json");

/// The bundled seed dataset.
///
/// A bundled snapshot that fails to parse degrades to an empty store
/// rather than failing the session.
pub fn seed_db() -> ClinicDb {
    match serde_json::from_str(SEED_JSON) {
        Ok(db) => db,
        Err(e) => {
            tracing::warn!("bundled seed snapshot failed to parse: {e}");
            ClinicDb::default()
        }
    }
}
