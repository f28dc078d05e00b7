//! Data models for the correspondence-tracking domain.
//!
//! The two persistent entities are [`Courrier`] (a mail item) and [`Suivi`]
//! (a follow-up action attached to a courrier). Everything else in the crate
//! is a derived, ephemeral view over collections of these.

pub mod courrier;
pub mod suivi;

pub use courrier::{Courrier, CourrierCreateRequest, CourrierType, Nature};
pub use suivi::{Suivi, SuiviCreateRequest};
