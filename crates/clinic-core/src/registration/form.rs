//! Registration form values and field-level validation.

use serde::{Deserialize, Serialize};

use crate::models::{Gender, PatientRecord, PaymentMethod};
use crate::phone;

/// One chosen service with the doctor who will perform it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSelection {
    pub service_id: String,
    /// Doctor for this line. Distinct doctors per service are supported;
    /// unassigned lines fall back to the default doctor at payment time.
    pub doctor_id: Option<String>,
}

/// A field-level validation failure, keyed for inline display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Input values for one registration submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    /// Existing patient to update in place; new patient when absent.
    pub patient_id: Option<String>,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub gender: Option<Gender>,
    pub birth_date: String,
    /// Expected in normalized `+998XXXXXXXXX` form.
    pub phone: String,
    pub district_id: Option<String>,
    pub address: String,
    pub pinfl: Option<String>,

    pub discount_id: Option<String>,
    pub has_referral: bool,
    pub referral_info: Option<String>,
    pub referral_doctor_id: Option<String>,
    pub insurance: bool,

    pub open_new_card: bool,
    pub card_type_id: Option<String>,
    pub card_number: Option<String>,
    pub card_opened_at: Option<String>,
    pub responsible_doctor_id: Option<String>,

    pub selections: Vec<ServiceSelection>,

    /// Captured at registration time in the richer flow; otherwise chosen
    /// later at the cash desk.
    pub payment_method: Option<PaymentMethod>,
    pub paid_amount: Option<i64>,
}

impl RegistrationForm {
    /// Validate every rule and collect all failures, so the caller can
    /// surface each message next to its field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        require(&mut errors, "lastName", filled(&self.last_name), "Last name is required");
        require(&mut errors, "firstName", filled(&self.first_name), "First name is required");
        require(&mut errors, "middleName", filled(&self.middle_name), "Middle name is required");
        require(&mut errors, "birthDate", filled(&self.birth_date), "Birth date is required");
        require(&mut errors, "gender", self.gender.is_some(), "Select a gender");
        require(
            &mut errors,
            "phone",
            phone::is_normalized(&self.phone),
            "Phone must match +998XXXXXXXXX",
        );
        require(&mut errors, "address", filled(&self.address), "Address is required");

        if self.has_referral {
            require(
                &mut errors,
                "referralDoctorId",
                filled_opt(&self.referral_doctor_id),
                "Referral doctor is required",
            );
        }

        if self.open_new_card {
            require(
                &mut errors,
                "cardTypeId",
                filled_opt(&self.card_type_id),
                "Select a card type",
            );
            require(
                &mut errors,
                "cardNumber",
                filled_opt(&self.card_number),
                "Card number is required",
            );
            require(
                &mut errors,
                "cardOpenedAt",
                filled_opt(&self.card_opened_at),
                "Card opening date is required",
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Patient fields of the form, ready for the store's find-or-update.
    /// `None` only when the gender field is missing (validation rejects it).
    pub(crate) fn patient_record(&self) -> Option<PatientRecord> {
        Some(PatientRecord {
            id: self.patient_id.clone(),
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            gender: self.gender?,
            birth_date: self.birth_date.clone(),
            phone: self.phone.clone(),
            district_id: self.district_id.clone(),
            address: self.address.clone(),
            pinfl: self.pinfl.clone(),
        })
    }

    /// Doctor chosen for a given service, if any.
    pub(crate) fn doctor_for(&self, service_id: &str) -> Option<String> {
        self.selections
            .iter()
            .find(|sel| sel.service_id == service_id)
            .and_then(|sel| sel.doctor_id.clone())
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn filled_opt(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn require(errors: &mut Vec<FieldError>, field: &str, ok: bool, message: &str) {
    if !ok {
        errors.push(FieldError::new(field, message));
    }
}
