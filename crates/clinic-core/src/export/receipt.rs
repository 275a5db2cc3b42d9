//! Printable receipt rendering for completed registrations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::format_amount;
use crate::models::PaymentMethod;
use crate::store::{ClinicStore, StoreResult};

/// Width of the narrow cash-printer layout, in characters.
const WIDTH: usize = 42;

/// One printed line: service, doctor, price at sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub service: String,
    pub doctor: String,
    pub price: i64,
}

/// A printable payment record for one registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub clinic_name: String,
    pub patient_name: String,
    pub phone: String,
    pub date: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: i64,
    pub discount_amount: i64,
    pub total: i64,
    pub payment_method: PaymentMethod,
    pub paid: bool,
}

/// Builds receipts by resolving display names against the store.
pub struct ReceiptPrinter<'a> {
    store: &'a ClinicStore,
}

impl<'a> ReceiptPrinter<'a> {
    pub fn new(store: &'a ClinicStore) -> Self {
        Self { store }
    }

    /// Assemble a receipt for a draft. Names of deactivated services and
    /// doctors still resolve; dangling references get placeholder labels.
    pub fn for_draft(
        &self,
        draft_id: &str,
        method: PaymentMethod,
        paid: bool,
        date: NaiveDate,
    ) -> StoreResult<Receipt> {
        let draft = self.store.registration_draft(draft_id)?;
        let patient = self
            .store
            .patients()
            .into_iter()
            .find(|p| p.id == draft.patient_id);

        let lines = draft
            .services
            .iter()
            .map(|line| ReceiptLine {
                service: self.service_name(&line.service_id),
                doctor: self.doctor_name(line.doctor_id.as_deref()),
                price: line.price,
            })
            .collect();

        Ok(Receipt {
            clinic_name: self.store.dictionaries().meta.clinic_name,
            patient_name: patient
                .as_ref()
                .map(|p| p.full_name())
                .unwrap_or_else(|| "Unknown patient".into()),
            phone: patient.map(|p| p.phone).unwrap_or_default(),
            date: date.format("%d.%m.%Y").to_string(),
            lines,
            subtotal: draft.subtotal,
            discount_amount: draft.discount_amount,
            total: draft.total,
            payment_method: method,
            paid,
        })
    }

    fn service_name(&self, id: &str) -> String {
        self.store
            .service(id)
            .map(|s| s.name)
            .unwrap_or_else(|_| "Unknown service".into())
    }

    fn doctor_name(&self, id: Option<&str>) -> String {
        id.and_then(|id| self.store.doctor(id).ok())
            .map(|d| d.full_name)
            .unwrap_or_else(|| "Not assigned".into())
    }
}

impl Receipt {
    /// Render as plain text for a narrow cash printer.
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(WIDTH);
        let dashes = "-".repeat(WIDTH);
        let mut out = String::new();

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&center("PAYMENT RECORD"));
        out.push_str(&center(&self.clinic_name));
        out.push_str(&dashes);
        out.push('\n');
        out.push_str(&format!("Patient: {}\n", self.patient_name));
        out.push_str(&format!("Phone:   {}\n", self.phone));
        out.push_str(&format!("Date:    {}\n", self.date));
        out.push_str(&dashes);
        out.push('\n');

        for line in &self.lines {
            out.push_str(&line.service);
            out.push('\n');
            out.push_str(&row(&format!("  {}", line.doctor), &format_amount(line.price)));
        }

        out.push_str(&dashes);
        out.push('\n');
        out.push_str(&row("Subtotal:", &format_amount(self.subtotal)));
        if self.discount_amount > 0 {
            out.push_str(&row("Discount:", &format!("-{}", format_amount(self.discount_amount))));
        }
        out.push_str(&row("TOTAL:", &format_amount(self.total)));
        out.push_str(&dashes);
        out.push('\n');
        out.push_str(&center(if self.paid { "PAID" } else { "UNPAID" }));
        out.push_str(&format!("Payment method: {}\n", self.payment_method.label()));
        out.push_str(&dashes);
        out.push('\n');
        out.push_str(&center("Thank you for your visit!"));
        out.push_str(&rule);
        out.push('\n');
        out
    }

    /// Render as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= WIDTH {
        return format!("{text}\n");
    }
    format!("{}{}\n", " ".repeat((WIDTH - len) / 2), text)
}

fn row(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = if used >= WIDTH { 1 } else { WIDTH - used };
    format!("{left}{}{right}\n", " ".repeat(gap))
}
