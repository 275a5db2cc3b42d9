//! Clinic reference catalog models.

use serde::{Deserialize, Serialize};

/// Identifier of the sentinel "no discount" entry, present in every seed.
pub const NO_DISCOUNT_ID: &str = "disc_none";

/// Clinic-wide metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    pub clinic_name: String,
    pub currency: String,
    pub timezone: String,
}

/// A city district, referenced by patient addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct District {
    pub id: String,
    pub name: String,
}

/// A percentage discount applied to a whole registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub id: String,
    pub label: String,
    /// Percent off the subtotal, constrained to [0, 100].
    pub percent: f64,
}

impl Discount {
    /// The sentinel entry meaning "no discount applied".
    pub fn none() -> Self {
        Self {
            id: NO_DISCOUNT_ID.into(),
            label: "No discount".into(),
            percent: 0.0,
        }
    }
}

/// A kind of patient card the clinic can open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardType {
    pub id: String,
    pub name: String,
}

/// A medical specialty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specialty {
    pub id: String,
    pub name: String,
}

/// A grouping of services for the picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
}

/// A practicing doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub full_name: String,
    pub specialty_id: String,
    pub active: bool,
    /// Services this doctor performs; drives the per-line doctor choice.
    pub service_ids: Vec<String>,
}

impl Doctor {
    /// Create a new active doctor.
    pub fn new(full_name: String, specialty_id: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            full_name,
            specialty_id,
            active: true,
            service_ids: Vec::new(),
        }
    }

    /// Check whether this doctor performs a given service.
    pub fn performs(&self, service_id: &str) -> bool {
        if self.service_ids.is_empty() {
            return true; // No restriction means any service
        }
        self.service_ids.iter().any(|s| s == service_id)
    }
}

/// A billable service from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub category_id: String,
    pub specialty_id: String,
    pub name: String,
    /// Price in whole currency units; copied into drafts at sale time.
    pub price: i64,
    pub active: bool,
}

impl Service {
    /// Create a new active service.
    pub fn new(name: String, category_id: String, specialty_id: String, price: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category_id,
            specialty_id,
            name,
            price,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_discount_sentinel() {
        let none = Discount::none();
        assert_eq!(none.id, NO_DISCOUNT_ID);
        assert_eq!(none.percent, 0.0);
    }

    #[test]
    fn test_doctor_performs() {
        let mut doctor = Doctor::new("Karimov A. R.".into(), "spec_ent".into());
        doctor.service_ids = vec!["svc_consult".into()];

        assert!(doctor.performs("svc_consult"));
        assert!(!doctor.performs("svc_ecg"));
    }

    #[test]
    fn test_empty_service_list_means_any() {
        let doctor = Doctor::new("Karimov A. R.".into(), "spec_ent".into());
        assert!(doctor.performs("anything"));
    }

    #[test]
    fn test_new_service_is_active() {
        let service = Service::new(
            "ENT consultation".into(),
            "cat_reception".into(),
            "spec_ent".into(),
            80_000,
        );
        assert!(service.active);
        assert_eq!(service.id.len(), 36); // UUID format
        assert_eq!(service.price, 80_000);
    }

    #[test]
    fn test_service_camel_case_json() {
        let service = Service::new("ECG".into(), "cat_diag".into(), "spec_cardio".into(), 60_000);
        let json = serde_json::to_string(&service).unwrap();
        assert!(json.contains("categoryId"));
        assert!(json.contains("specialtyId"));
    }
}
