//! Per-doctor income attribution for completed registrations.

use chrono::NaiveDate;

use super::pricing::round_half_up;
use crate::models::{IncomeEntry, PaymentMethod, RegistrationDraft, Service};

/// Description used when none of the draft's services resolve to a name.
const DEFAULT_DESCRIPTION: &str = "Registration";

/// Split a paid draft's total across contributing doctors, proportional to
/// each doctor's share of the pre-discount subtotal.
///
/// Shares are rounded independently, so their sum may drift from the draft
/// total by at most one unit per doctor; the drift is left unreconciled.
/// Groups whose computed share is zero or negative emit nothing.
pub fn attribute_income(
    draft: &RegistrationDraft,
    catalog: &[Service],
    fallback_doctor_id: &str,
    date: NaiveDate,
    method: PaymentMethod,
) -> Vec<IncomeEntry> {
    // Group line prices by doctor, preserving first-seen order.
    let mut groups: Vec<(String, i64)> = Vec::new();
    for line in &draft.services {
        let doctor_id = line
            .doctor_id
            .clone()
            .unwrap_or_else(|| fallback_doctor_id.to_string());
        match groups.iter_mut().find(|(id, _)| *id == doctor_id) {
            Some((_, sum)) => *sum += line.price,
            None => groups.push((doctor_id, line.price)),
        }
    }

    // A zero subtotal must not fabricate shares through division by zero.
    let subtotal = draft.subtotal.max(1);
    let description = describe_services(draft, catalog);
    let date = date.format("%Y-%m-%d").to_string();

    groups
        .into_iter()
        .filter_map(|(doctor_id, doctor_subtotal)| {
            let amount =
                round_half_up(doctor_subtotal as f64 / subtotal as f64 * draft.total as f64);
            (amount > 0).then(|| IncomeEntry {
                date: date.clone(),
                amount,
                description: description.clone(),
                payment_method: method,
                patient_id: Some(draft.patient_id.clone()),
                doctor_id: Some(doctor_id),
            })
        })
        .collect()
}

/// Joined names of the draft's services, for ledger descriptions.
fn describe_services(draft: &RegistrationDraft, catalog: &[Service]) -> String {
    let names: Vec<&str> = draft
        .services
        .iter()
        .filter_map(|line| {
            catalog
                .iter()
                .find(|s| s.id == line.service_id)
                .map(|s| s.name.as_str())
        })
        .collect();
    if names.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceLine;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    fn line(service_id: &str, doctor: Option<&str>, price: i64) -> ServiceLine {
        ServiceLine {
            service_id: service_id.into(),
            doctor_id: doctor.map(Into::into),
            price,
        }
    }

    fn draft(lines: Vec<ServiceLine>, discount_percent: f64) -> RegistrationDraft {
        let subtotal: i64 = lines.iter().map(|l| l.price).sum();
        let discount_amount = (subtotal as f64 * discount_percent / 100.0).round() as i64;
        let mut draft = RegistrationDraft::new("pat-1".into());
        draft.services = lines;
        draft.subtotal = subtotal;
        draft.discount_amount = discount_amount;
        draft.total = subtotal - discount_amount;
        draft
    }

    fn catalog() -> Vec<Service> {
        vec![
            Service {
                id: "svc_a".into(),
                category_id: "cat".into(),
                specialty_id: "spec".into(),
                name: "Consultation".into(),
                price: 10_000,
                active: true,
            },
            Service {
                id: "svc_b".into(),
                category_id: "cat".into(),
                specialty_id: "spec".into(),
                name: "Endoscopy".into(),
                price: 30_000,
                active: true,
            },
        ]
    }

    #[test]
    fn test_golden_split() {
        // Prices [10000, 20000, 30000] for doctors [D1, D1, D2], 10% off.
        let draft = draft(
            vec![
                line("svc_a", Some("d1"), 10_000),
                line("svc_a", Some("d1"), 20_000),
                line("svc_b", Some("d2"), 30_000),
            ],
            10.0,
        );
        assert_eq!(draft.subtotal, 60_000);
        assert_eq!(draft.total, 54_000);

        let entries = attribute_income(&draft, &catalog(), "doc_default", date(), PaymentMethod::Cash);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].doctor_id.as_deref(), Some("d1"));
        assert_eq!(entries[0].amount, 27_000);
        assert_eq!(entries[1].doctor_id.as_deref(), Some("d2"));
        assert_eq!(entries[1].amount, 27_000);
        assert_eq!(entries.iter().map(|e| e.amount).sum::<i64>(), 54_000);
    }

    #[test]
    fn test_fallback_doctor_groups_unassigned_lines() {
        let draft = draft(
            vec![line("svc_a", None, 10_000), line("svc_b", None, 20_000)],
            0.0,
        );
        let entries = attribute_income(&draft, &catalog(), "doc_default", date(), PaymentMethod::Cash);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].doctor_id.as_deref(), Some("doc_default"));
        assert_eq!(entries[0].amount, 30_000);
    }

    #[test]
    fn test_empty_draft_emits_nothing() {
        let draft = draft(Vec::new(), 0.0);
        let entries = attribute_income(&draft, &catalog(), "doc_default", date(), PaymentMethod::Cash);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_zero_priced_group_is_skipped() {
        let draft = draft(
            vec![line("svc_a", Some("d1"), 0), line("svc_b", Some("d2"), 40_000)],
            0.0,
        );
        let entries = attribute_income(&draft, &catalog(), "doc_default", date(), PaymentMethod::Cash);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].doctor_id.as_deref(), Some("d2"));
    }

    #[test]
    fn test_description_joins_resolved_names() {
        let draft = draft(
            vec![
                line("svc_a", Some("d1"), 10_000),
                line("svc_missing", Some("d1"), 5_000),
                line("svc_b", Some("d1"), 30_000),
            ],
            0.0,
        );
        let entries = attribute_income(&draft, &catalog(), "doc_default", date(), PaymentMethod::Card);
        assert_eq!(entries[0].description, "Consultation, Endoscopy");
    }

    #[test]
    fn test_rounding_drift_stays_within_doctor_count() {
        // Three equal thirds of a total that does not divide evenly.
        let draft = draft(
            vec![
                line("svc_a", Some("d1"), 10_000),
                line("svc_a", Some("d2"), 10_000),
                line("svc_a", Some("d3"), 10_000),
            ],
            33.0,
        );
        let entries = attribute_income(&draft, &catalog(), "doc_default", date(), PaymentMethod::Cash);
        let sum: i64 = entries.iter().map(|e| e.amount).sum();
        assert!((sum - draft.total).abs() <= entries.len() as i64);
    }

    #[test]
    fn test_stamps_patient_date_and_method() {
        let draft = draft(vec![line("svc_a", Some("d1"), 10_000)], 0.0);
        let entries = attribute_income(&draft, &catalog(), "doc_default", date(), PaymentMethod::Debt);
        assert_eq!(entries[0].date, "2026-08-05");
        assert_eq!(entries[0].patient_id.as_deref(), Some("pat-1"));
        assert_eq!(entries[0].payment_method, PaymentMethod::Debt);
    }
}
