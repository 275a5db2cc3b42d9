//! Patient registration: form validation and draft building.

mod builder;
mod form;

pub use builder::*;
pub use form::*;
