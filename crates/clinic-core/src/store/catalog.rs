//! Reference catalog operations.

use serde::{Deserialize, Serialize};

use super::{ClinicStore, StoreError, StoreResult};
use crate::models::{
    CardType, Discount, District, Doctor, Meta, Service, ServiceCategory, Specialty,
    NO_DISCOUNT_ID,
};

/// Reference data bundle handed to registration forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dictionaries {
    pub meta: Meta,
    pub districts: Vec<District>,
    pub discounts: Vec<Discount>,
    pub card_types: Vec<CardType>,
    pub specialties: Vec<Specialty>,
    pub service_categories: Vec<ServiceCategory>,
}

impl ClinicStore {
    /// Clinic metadata and reference lists, as a defensive copy.
    pub fn dictionaries(&self) -> Dictionaries {
        self.simulate_latency();
        Dictionaries {
            meta: self.db.meta.clone(),
            districts: self.db.districts.clone(),
            discounts: self.db.discounts.clone(),
            card_types: self.db.card_types.clone(),
            specialties: self.db.specialties.clone(),
            service_categories: self.db.service_categories.clone(),
        }
    }

    /// Active doctors.
    pub fn doctors(&self) -> Vec<Doctor> {
        self.simulate_latency();
        self.db.doctors.iter().filter(|d| d.active).cloned().collect()
    }

    /// Active services.
    pub fn services(&self) -> Vec<Service> {
        self.simulate_latency();
        self.db.services.iter().filter(|s| s.active).cloned().collect()
    }

    /// Look up a service by id, regardless of its active flag.
    pub fn service(&self, id: &str) -> StoreResult<Service> {
        self.db
            .services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("service {id}")))
    }

    /// Look up a doctor by id, regardless of the active flag.
    pub fn doctor(&self, id: &str) -> StoreResult<Doctor> {
        self.db
            .doctors
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("doctor {id}")))
    }

    /// Resolve a discount by id, falling back to the no-discount sentinel.
    pub fn discount_or_none(&self, id: Option<&str>) -> Discount {
        let discounts = &self.db.discounts;
        id.and_then(|id| discounts.iter().find(|d| d.id == id))
            .or_else(|| discounts.iter().find(|d| d.id == NO_DISCOUNT_ID))
            .cloned()
            .unwrap_or_else(Discount::none)
    }

    /// Insert or replace a service. New records get a generated id.
    pub fn upsert_service(&mut self, mut service: Service) -> Service {
        self.simulate_latency();
        if service.id.is_empty() {
            service.id = uuid::Uuid::new_v4().to_string();
        }
        match self.db.services.iter_mut().find(|s| s.id == service.id) {
            Some(slot) => *slot = service.clone(),
            None => self.db.services.push(service.clone()),
        }
        self.persist();
        service
    }

    /// Insert or replace a doctor. New records get a generated id.
    pub fn upsert_doctor(&mut self, mut doctor: Doctor) -> Doctor {
        self.simulate_latency();
        if doctor.id.is_empty() {
            doctor.id = uuid::Uuid::new_v4().to_string();
        }
        match self.db.doctors.iter_mut().find(|d| d.id == doctor.id) {
            Some(slot) => *slot = doctor.clone(),
            None => self.db.doctors.push(doctor.clone()),
        }
        self.persist();
        doctor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    fn setup_store() -> ClinicStore {
        ClinicStore::open_in_memory()
    }

    #[test]
    fn test_doctors_and_services_are_active_only() {
        let store = setup_store();
        assert!(store.doctors().iter().all(|d| d.active));
        assert!(store.services().iter().all(|s| s.active));
    }

    #[test]
    fn test_inactive_service_still_resolves_by_id() {
        let store = setup_store();
        let inactive = store.service("svc_physio").unwrap();
        assert!(!inactive.active);
        assert!(!store.services().iter().any(|s| s.id == "svc_physio"));
    }

    #[test]
    fn test_unknown_service_is_not_found() {
        let store = setup_store();
        let err = store.service("svc_missing").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_discount_fallback_to_sentinel() {
        let store = setup_store();

        let known = store.discount_or_none(Some("disc_10"));
        assert_eq!(known.percent, 10.0);

        let unknown = store.discount_or_none(Some("disc_99"));
        assert_eq!(unknown.id, NO_DISCOUNT_ID);

        let absent = store.discount_or_none(None);
        assert_eq!(absent.id, NO_DISCOUNT_ID);
    }

    #[test]
    fn test_upsert_service_assigns_id_and_updates_in_place() {
        let mut store = setup_store();

        let mut service = Service::new("MRI scan".into(), "cat_diagnostics".into(), "spec_ent".into(), 400_000);
        service.id = String::new();
        let created = store.upsert_service(service);
        assert!(!created.id.is_empty());

        let mut updated = created.clone();
        updated.price = 450_000;
        store.upsert_service(updated);

        assert_eq!(store.service(&created.id).unwrap().price, 450_000);
        let count = store.services().iter().filter(|s| s.id == created.id).count();
        assert_eq!(count, 1);
    }
}
