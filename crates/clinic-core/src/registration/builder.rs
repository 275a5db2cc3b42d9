//! Draft builder: turns a validated form into a persisted registration.

use thiserror::Error;

use super::form::{FieldError, RegistrationForm};
use crate::billing::price_selection;
use crate::models::{Patient, RegistrationDraft, ServiceLine};
use crate::store::{ClinicStore, StoreError};

/// Errors from a registration submission.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Field-level failures; nothing was written to the store.
    #[error("registration form is invalid")]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOutcome {
    pub patient: Patient,
    pub draft: RegistrationDraft,
}

/// Run the registration pipeline: validate, resolve the patient, price the
/// selection, and persist the draft.
///
/// Validation failures block the whole pipeline; the patient is neither
/// created nor updated.
pub fn submit_registration(
    store: &mut ClinicStore,
    form: &RegistrationForm,
) -> Result<RegistrationOutcome, RegistrationError> {
    form.validate().map_err(RegistrationError::Invalid)?;
    let record = form
        .patient_record()
        .ok_or_else(|| RegistrationError::Invalid(vec![FieldError::new("gender", "Select a gender")]))?;

    let patient = store.create_or_update_patient(record);

    let catalog = store.services();
    let discount = store.discount_or_none(form.discount_id.as_deref());
    let selected_ids: Vec<String> = form
        .selections
        .iter()
        .map(|sel| sel.service_id.clone())
        .collect();
    let quote = price_selection(&selected_ids, &catalog, discount.percent);

    // Lines follow catalog order so they always cover the priced subtotal.
    let lines: Vec<ServiceLine> = catalog
        .iter()
        .filter(|s| selected_ids.iter().any(|id| id == &s.id))
        .map(|s| ServiceLine {
            service_id: s.id.clone(),
            doctor_id: form.doctor_for(&s.id),
            price: s.price,
        })
        .collect();

    let mut draft = RegistrationDraft::new(patient.id.clone());
    draft.discount_id = Some(discount.id);
    draft.open_new_card = form.open_new_card;
    if form.open_new_card {
        draft.card_type_id = form.card_type_id.clone();
        draft.card_number = form.card_number.clone();
        draft.card_opened_at = form.card_opened_at.clone();
    }
    draft.responsible_doctor_id = form.responsible_doctor_id.clone();
    draft.referral_info = form.referral_info.clone();
    if form.has_referral {
        draft.referral_doctor_id = form.referral_doctor_id.clone();
    }
    draft.insurance = form.insurance;
    draft.services = lines;
    draft.subtotal = quote.subtotal;
    draft.discount_amount = quote.discount_amount;
    draft.total = quote.total;
    draft.payment_method = form.payment_method;
    draft.paid_amount = form.paid_amount;

    let draft = store.create_registration_draft(draft);
    Ok(RegistrationOutcome { patient, draft })
}
