//! Clinic Front-Desk Core Library
//!
//! Data model and business logic for a small clinic's administrative
//! console: patient registration, service/doctor catalog management, cash
//! handling, and financial reporting.
//!
//! # Architecture
//!
//! ```text
//! Registration form
//!        │  validate (field-level errors)
//!        ▼
//! Patient resolver ────► Catalog store (find-or-create by id)
//!        │
//!        ▼
//! Pricing engine (subtotal / discount / total)
//!        │
//!        ▼
//! Draft builder ───────► Catalog store (persist draft + snapshot)
//!        │
//!        ▼  complete payment (one-time per draft)
//! Income attribution ──► income ledger
//!        │
//!        ├────────► Receipt
//!        └────────► Income / salary reports
//! ```
//!
//! # Core Principle
//!
//! **The store is the only writer.** All state lives in one [`store::ClinicStore`]
//! constructed per session; every mutation is mirrored to a pluggable
//! snapshot backend before it returns.
//!
//! # Modules
//!
//! - [`store`]: catalog store with pluggable snapshot persistence
//! - [`models`]: domain types (Patient, Service, RegistrationDraft, ...)
//! - [`billing`]: pricing engine and per-doctor income attribution
//! - [`registration`]: form validation and draft building
//! - [`export`]: receipt rendering and income/salary reports
//! - [`phone`]: national phone number normalization

pub mod billing;
pub mod config;
pub mod export;
pub mod models;
pub mod phone;
pub mod registration;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use billing::{attribute_income, price_selection, Quote};
pub use config::{ClinicConfig, Storage};
pub use models::{
    CardType, Discount, District, Doctor, Gender, IncomeEntry, Meta, Patient, PatientRecord,
    PaymentMethod, RegistrationDraft, Service, ServiceCategory, ServiceLine, Specialty,
    NO_DISCOUNT_ID,
};
pub use registration::{
    submit_registration, FieldError, RegistrationError, RegistrationForm, RegistrationOutcome,
    ServiceSelection,
};
pub use store::{
    ClinicDb, ClinicStore, Dictionaries, JsonFileSnapshot, MemorySnapshot, SnapshotStore,
    SqliteSnapshot, StoreError, StoreResult,
};
