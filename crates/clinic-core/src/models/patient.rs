//! Patient models.

use serde::{Deserialize, Serialize};

/// Patient gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub gender: Gender,
    /// Birth date as an ISO calendar date.
    pub birth_date: String,
    /// Normalized phone (`+998XXXXXXXXX`). Secondary lookup key, not unique.
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    pub address: String,
    /// National identification number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinfl: Option<String>,
}

impl Patient {
    /// Display name: "Last First Middle", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.last_name, self.first_name, self.middle_name)
            .trim()
            .to_string()
    }
}

/// Patient fields as supplied by callers; `id` is present only for updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub gender: Gender,
    pub birth_date: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinfl: Option<String>,
}

impl PatientRecord {
    /// Materialize the record under the given identifier.
    pub fn into_patient(self, id: String) -> Patient {
        Patient {
            id,
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            gender: self.gender,
            birth_date: self.birth_date,
            phone: self.phone,
            district_id: self.district_id,
            address: self.address,
            pinfl: self.pinfl,
        }
    }
}

impl From<Patient> for PatientRecord {
    fn from(patient: Patient) -> Self {
        Self {
            id: Some(patient.id),
            last_name: patient.last_name,
            first_name: patient.first_name,
            middle_name: patient.middle_name,
            gender: patient.gender,
            birth_date: patient.birth_date,
            phone: patient.phone,
            district_id: patient.district_id,
            address: patient.address,
            pinfl: patient.pinfl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> PatientRecord {
        PatientRecord {
            id: None,
            last_name: "Alimova".into(),
            first_name: "Nilufar".into(),
            middle_name: "Shavkatovna".into(),
            gender: Gender::Female,
            birth_date: "1990-04-12".into(),
            phone: "+998901234567".into(),
            district_id: None,
            address: "Tashkent, Chilanzar 5".into(),
            pinfl: None,
        }
    }

    #[test]
    fn test_full_name() {
        let patient = make_record().into_patient("pat-1".into());
        assert_eq!(patient.full_name(), "Alimova Nilufar Shavkatovna");
    }

    #[test]
    fn test_record_round_trip() {
        let patient = make_record().into_patient("pat-1".into());
        let record = PatientRecord::from(patient.clone());
        assert_eq!(record.id, Some("pat-1".into()));
        assert_eq!(record.into_patient("pat-1".into()), patient);
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Male).unwrap();
        assert_eq!(json, r#""male""#);
    }
}
