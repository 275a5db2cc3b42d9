//! Registration draft models.

use serde::{Deserialize, Serialize};

/// How a registration was (or will be) paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Debt,
}

impl PaymentMethod {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Debt => "On credit",
        }
    }
}

/// A single service sold within a registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    pub service_id: String,
    /// Doctor performing this line; unassigned lines fall back to the
    /// configured default doctor at attribution time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    /// Catalog price at the moment of sale.
    pub price: i64,
}

/// A persisted registration. Append-only: once created, only the payment
/// fields change, exactly once, when payment completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub id: String,
    pub patient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_id: Option<String>,
    pub open_new_card: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_opened_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_doctor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_doctor_id: Option<String>,
    pub insurance: bool,
    pub services: Vec<ServiceLine>,
    pub subtotal: i64,
    pub discount_amount: i64,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<i64>,
    /// Set exactly once when payment completes; guards against replay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    pub created_at: String,
}

impl RegistrationDraft {
    /// Create an empty draft for a patient. The store re-stamps the id and
    /// creation time on insert.
    pub fn new(patient_id: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            patient_id,
            discount_id: None,
            open_new_card: false,
            card_type_id: None,
            card_number: None,
            card_opened_at: None,
            responsible_doctor_id: None,
            referral_info: None,
            referral_doctor_id: None,
            insurance: false,
            services: Vec::new(),
            subtotal: 0,
            discount_amount: 0,
            total: 0,
            payment_method: None,
            paid_amount: None,
            paid_at: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether payment for this draft has already completed.
    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft() {
        let draft = RegistrationDraft::new("pat-1".into());
        assert_eq!(draft.patient_id, "pat-1");
        assert_eq!(draft.id.len(), 36);
        assert!(draft.services.is_empty());
        assert_eq!(draft.total, 0);
        assert!(!draft.is_paid());
    }

    #[test]
    fn test_paid_marker() {
        let mut draft = RegistrationDraft::new("pat-1".into());
        draft.paid_at = Some("2026-08-05T10:00:00Z".into());
        assert!(draft.is_paid());
    }

    #[test]
    fn test_payment_method_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Debt).unwrap(),
            r#""debt""#
        );
        let parsed: PaymentMethod = serde_json::from_str(r#""cash""#).unwrap();
        assert_eq!(parsed, PaymentMethod::Cash);
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let draft = RegistrationDraft::new("pat-1".into());
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("paidAt"));
        assert!(!json.contains("cardNumber"));
        assert!(json.contains("createdAt"));
    }
}
