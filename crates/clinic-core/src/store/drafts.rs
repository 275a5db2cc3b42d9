//! Registration draft operations.

use super::{ClinicStore, StoreError, StoreResult};
use crate::models::RegistrationDraft;

impl ClinicStore {
    /// Append a draft under a fresh id and creation timestamp.
    pub fn create_registration_draft(&mut self, mut draft: RegistrationDraft) -> RegistrationDraft {
        self.simulate_latency();
        draft.id = uuid::Uuid::new_v4().to_string();
        draft.created_at = chrono::Utc::now().to_rfc3339();
        self.db.registration_drafts.push(draft.clone());
        self.persist();
        draft
    }

    /// Look up a draft by id.
    pub fn registration_draft(&self, id: &str) -> StoreResult<RegistrationDraft> {
        self.simulate_latency();
        self.db
            .registration_drafts
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("registration draft {id}")))
    }

    /// All drafts, in creation order.
    pub fn registration_drafts(&self) -> Vec<RegistrationDraft> {
        self.simulate_latency();
        self.db.registration_drafts.clone()
    }
}
