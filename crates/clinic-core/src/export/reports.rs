//! Income and doctor salary reporting.

use std::collections::{BTreeSet, HashMap};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::escape_csv;
use crate::billing::round_half_up;
use crate::models::{Doctor, IncomeEntry, Patient, PaymentMethod};

/// Days covered by the daily breakdown.
const DAILY_WINDOW: u64 = 7;

/// Rows shown in the recent-payments table.
const RECENT_LIMIT: usize = 10;

/// Ledger totals split by payment method.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTotals {
    pub cash: i64,
    pub card: i64,
    pub debt: i64,
    pub total: i64,
}

/// One day of income within the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyIncome {
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub cash: i64,
    pub card: i64,
    pub debt: i64,
}

/// A ledger row enriched with the patient's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRow {
    pub date: String,
    pub patient_name: String,
    pub description: String,
    pub amount: i64,
    pub payment_method: PaymentMethod,
}

/// Cash-desk dashboard data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    pub totals: IncomeTotals,
    /// Trailing seven days, oldest first.
    pub daily: Vec<DailyIncome>,
    /// Most recent entries first, capped at ten.
    pub recent: Vec<IncomeRow>,
}

/// Build the cash-desk dashboard from the income ledger.
pub fn income_report(entries: &[IncomeEntry], patients: &[Patient], today: NaiveDate) -> IncomeReport {
    let mut totals = IncomeTotals::default();
    for entry in entries {
        match entry.payment_method {
            PaymentMethod::Cash => totals.cash += entry.amount,
            PaymentMethod::Card => totals.card += entry.amount,
            PaymentMethod::Debt => totals.debt += entry.amount,
        }
        totals.total += entry.amount;
    }

    let mut daily: Vec<DailyIncome> = (0..DAILY_WINDOW)
        .rev()
        .filter_map(|i| today.checked_sub_days(Days::new(i)))
        .map(|date| DailyIncome {
            date: date.format("%Y-%m-%d").to_string(),
            cash: 0,
            card: 0,
            debt: 0,
        })
        .collect();
    for entry in entries {
        // Entry dates may carry a time suffix; the day prefix is enough.
        let day = entry.date.get(0..10).unwrap_or(&entry.date);
        if let Some(slot) = daily.iter_mut().find(|d| d.date == day) {
            match entry.payment_method {
                PaymentMethod::Cash => slot.cash += entry.amount,
                PaymentMethod::Card => slot.card += entry.amount,
                PaymentMethod::Debt => slot.debt += entry.amount,
            }
        }
    }

    let recent = entries
        .iter()
        .rev()
        .take(RECENT_LIMIT)
        .map(|entry| IncomeRow {
            date: entry.date.clone(),
            patient_name: entry
                .patient_id
                .as_deref()
                .and_then(|id| patients.iter().find(|p| p.id == id))
                .map(|p| p.full_name())
                .unwrap_or_else(|| "Unknown".into()),
            description: entry.description.clone(),
            amount: entry.amount,
            payment_method: entry.payment_method,
        })
        .collect();

    IncomeReport { totals, daily, recent }
}

/// Per-doctor earnings over a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSalaryRow {
    pub doctor_id: String,
    pub full_name: String,
    pub patients_count: usize,
    pub entries_count: usize,
    pub total_income: i64,
    pub salary_percent: f64,
    pub salary_amount: i64,
}

/// Compute salary rows for active doctors over `[from, to]`, inclusive.
///
/// `overrides` replaces the global percent per doctor id. Rows are sorted
/// by income, highest first.
pub fn doctor_salary(
    entries: &[IncomeEntry],
    doctors: &[Doctor],
    from: NaiveDate,
    to: NaiveDate,
    global_percent: f64,
    overrides: &HashMap<String, f64>,
) -> Vec<DoctorSalaryRow> {
    let mut rows: Vec<DoctorSalaryRow> = doctors
        .iter()
        .filter(|d| d.active)
        .map(|doctor| {
            let mut total_income = 0;
            let mut entries_count = 0;
            let mut patients = BTreeSet::new();
            for entry in entries {
                if entry.doctor_id.as_deref() != Some(doctor.id.as_str()) {
                    continue;
                }
                let Ok(date) = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") else {
                    continue;
                };
                if date < from || date > to {
                    continue;
                }
                total_income += entry.amount;
                entries_count += 1;
                if let Some(patient_id) = &entry.patient_id {
                    patients.insert(patient_id.clone());
                }
            }

            let salary_percent = overrides.get(&doctor.id).copied().unwrap_or(global_percent);
            DoctorSalaryRow {
                doctor_id: doctor.id.clone(),
                full_name: doctor.full_name.clone(),
                patients_count: patients.len(),
                entries_count,
                total_income,
                salary_percent,
                salary_amount: round_half_up(total_income as f64 * salary_percent / 100.0),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total_income.cmp(&a.total_income));
    rows
}

/// Render salary rows as CSV.
pub fn salary_csv(rows: &[DoctorSalaryRow]) -> String {
    let mut csv = String::new();
    csv.push_str("doctor_id,full_name,patients,entries,total_income,salary_percent,salary_amount\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            escape_csv(&row.doctor_id),
            escape_csv(&row.full_name),
            row.patients_count,
            row.entries_count,
            row.total_income,
            row.salary_percent,
            row.salary_amount,
        ));
    }
    csv
}
