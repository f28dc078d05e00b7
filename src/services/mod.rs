//! Application service layer.
//!
//! Services orchestrate the repositories and the pure engines (query, stats,
//! timeline, validation) behind the operations the presentation layer
//! triggers. All failures carry a normalized human-readable message.

mod courrier_service;
mod suivi_service;

pub use courrier_service::{CourrierService, CourrierServiceImpl, SaveOutcome};
pub use suivi_service::{SuiviService, SuiviServiceImpl};

use crate::error::{ApiError, ValidationError};
use thiserror::Error;

/// Failure of a service operation: either a local validation rejection
/// (raised synchronously, before any collaborator call) or a normalized
/// remote failure.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ServiceError {
    /// The message shown to the user in a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation(e) => e.to_string(),
            ServiceError::Api(e) => e.user_message(),
        }
    }

    /// Whether the underlying failure is a missing record, which the
    /// presentation layer answers by navigating back to the list view.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Api(e) if e.is_not_found())
    }
}
