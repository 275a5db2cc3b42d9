//! Income ledger models.

use serde::{Deserialize, Serialize};

use super::PaymentMethod;

/// One ledger line of clinic income, attributed to a doctor.
///
/// Entries are append-only; the ledger is never mutated or compacted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub amount: i64,
    pub description: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let entry = IncomeEntry {
            date: "2026-08-05".into(),
            amount: 27_000,
            description: "ENT consultation".into(),
            payment_method: PaymentMethod::Cash,
            patient_id: Some("pat-1".into()),
            doctor_id: Some("doc_1001".into()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""paymentMethod":"cash""#));
        assert!(json.contains(r#""doctorId":"doc_1001""#));
    }
}
