//! Patient operations.

use super::ClinicStore;
use crate::models::{Patient, PatientRecord};
use crate::phone;

impl ClinicStore {
    /// All patients, in registration order.
    pub fn patients(&self) -> Vec<Patient> {
        self.simulate_latency();
        self.db.patients.clone()
    }

    /// Exact match on digits-only phone. Phone is not unique, so zero, one,
    /// or many patients may come back.
    pub fn search_patients_by_phone(&self, query: &str) -> Vec<Patient> {
        self.simulate_latency();
        let normalized = phone::digits_only(query);
        self.db
            .patients
            .iter()
            .filter(|p| phone::digits_only(&p.phone) == normalized)
            .cloned()
            .collect()
    }

    /// Overwrite an existing record when an id is supplied and found,
    /// otherwise append under a fresh id. Last write wins; no versioning.
    pub fn create_or_update_patient(&mut self, record: PatientRecord) -> Patient {
        self.simulate_latency();
        if let Some(id) = record.id.clone() {
            if let Some(slot) = self.db.patients.iter_mut().find(|p| p.id == id) {
                *slot = record.into_patient(id);
                let updated = slot.clone();
                self.persist();
                return updated;
            }
        }
        let created = record.into_patient(uuid::Uuid::new_v4().to_string());
        self.db.patients.push(created.clone());
        self.persist();
        created
    }
}
