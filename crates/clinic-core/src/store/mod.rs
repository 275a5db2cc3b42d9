//! Catalog store: the single source of truth for clinic data.
//!
//! One [`ClinicStore`] is constructed per session. It owns the whole
//! in-memory database and mirrors every mutation to a pluggable
//! [`SnapshotStore`] backend before returning.

mod catalog;
mod drafts;
mod income;
mod patients;
mod snapshot;

pub use catalog::*;
pub use snapshot::*;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClinicConfig;
use crate::models::{
    CardType, Discount, District, Doctor, IncomeEntry, Meta, Patient, RegistrationDraft, Service,
    ServiceCategory, Specialty,
};
use crate::seed;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Draft already paid: {0}")]
    AlreadyPaid(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-store snapshot shape, as persisted under the snapshot key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClinicDb {
    pub meta: Meta,
    pub districts: Vec<District>,
    pub discounts: Vec<Discount>,
    pub card_types: Vec<CardType>,
    pub specialties: Vec<Specialty>,
    pub service_categories: Vec<ServiceCategory>,
    pub doctors: Vec<Doctor>,
    pub services: Vec<Service>,
    pub patients: Vec<Patient>,
    pub registration_drafts: Vec<RegistrationDraft>,
    pub income: Vec<IncomeEntry>,
}

/// Single source of truth for clinic reference and transactional data.
pub struct ClinicStore {
    db: ClinicDb,
    snapshot: Box<dyn SnapshotStore>,
    latency: Option<Duration>,
    default_doctor_id: Option<String>,
}

impl ClinicStore {
    /// Open a store over the given snapshot backend, seeding on first use.
    pub fn open(snapshot: Box<dyn SnapshotStore>) -> StoreResult<Self> {
        Self::open_with_config(snapshot, ClinicConfig::default())
    }

    /// Open with explicit session configuration.
    pub fn open_with_config(
        snapshot: Box<dyn SnapshotStore>,
        config: ClinicConfig,
    ) -> StoreResult<Self> {
        let db = match snapshot.load()? {
            Some(db) => db,
            None => {
                tracing::info!("no persisted snapshot, seeding store");
                seed::seed_db()
            }
        };
        let latency = (config.simulated_latency_ms > 0)
            .then(|| Duration::from_millis(config.simulated_latency_ms));
        Ok(Self {
            db,
            snapshot,
            latency,
            default_doctor_id: config.default_doctor_id,
        })
    }

    /// In-memory store seeded from the bundled dataset; nothing persisted.
    pub fn open_in_memory() -> Self {
        Self {
            db: seed::seed_db(),
            snapshot: Box::new(MemorySnapshot),
            latency: None,
            default_doctor_id: None,
        }
    }

    /// Serialize the whole store to the snapshot backend. Failures are
    /// swallowed: in-memory state may run ahead of the snapshot until the
    /// next successful save.
    fn persist(&self) {
        if let Err(e) = self.snapshot.save(&self.db) {
            tracing::warn!("snapshot save failed: {e}");
        }
    }

    fn simulate_latency(&self) {
        if let Some(delay) = self.latency {
            std::thread::sleep(delay);
        }
    }
}
