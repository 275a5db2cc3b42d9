//! Income ledger operations and payment completion.

use super::{ClinicStore, StoreError, StoreResult};
use crate::billing::attribute_income;
use crate::models::{IncomeEntry, PaymentMethod};

/// Last-resort doctor credited when the store holds no doctors at all.
const FALLBACK_DOCTOR_ID: &str = "doc_1001";

impl ClinicStore {
    /// The full income ledger, in append order.
    pub fn income(&self) -> Vec<IncomeEntry> {
        self.simulate_latency();
        self.db.income.clone()
    }

    /// Append ledger entries in one batch.
    pub fn add_income_entries(&mut self, entries: Vec<IncomeEntry>) {
        self.simulate_latency();
        self.db.income.extend(entries);
        self.persist();
    }

    /// Doctor credited for service lines that carry no doctor.
    fn fallback_doctor_id(&self) -> String {
        self.default_doctor_id
            .clone()
            .or_else(|| self.db.doctors.first().map(|d| d.id.clone()))
            .unwrap_or_else(|| FALLBACK_DOCTOR_ID.to_string())
    }

    /// Complete payment for a draft: a one-time transition that stamps the
    /// paid marker and appends one income entry per contributing doctor.
    ///
    /// Replaying the same draft fails with [`StoreError::AlreadyPaid`] and
    /// appends nothing.
    pub fn complete_payment(
        &mut self,
        draft_id: &str,
        method: PaymentMethod,
    ) -> StoreResult<Vec<IncomeEntry>> {
        self.simulate_latency();
        let index = self
            .db
            .registration_drafts
            .iter()
            .position(|d| d.id == draft_id)
            .ok_or_else(|| StoreError::NotFound(format!("registration draft {draft_id}")))?;
        if self.db.registration_drafts[index].is_paid() {
            return Err(StoreError::AlreadyPaid(draft_id.to_string()));
        }

        let fallback = self.fallback_doctor_id();
        let today = chrono::Utc::now().date_naive();
        let entries = attribute_income(
            &self.db.registration_drafts[index],
            &self.db.services,
            &fallback,
            today,
            method,
        );

        let draft = &mut self.db.registration_drafts[index];
        draft.payment_method = Some(method);
        draft.paid_amount = Some(draft.total);
        draft.paid_at = Some(chrono::Utc::now().to_rfc3339());
        self.db.income.extend(entries.iter().cloned());
        self.persist();
        Ok(entries)
    }
}
