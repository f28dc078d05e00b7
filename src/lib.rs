//! Courrier Client - typed core for a correspondence-tracking application.
//!
//! This library turns a raw collection of correspondence records served by a
//! remote API into the derived views an office application displays: a
//! searchable, filterable list; per-item follow-up timelines; and dashboard
//! statistics for the current period.
//!
//! # Architecture
//!
//! - **models**: Courrier/Suivi entities and their enumerations
//! - **error**: normalized error taxonomy for remote and local failures
//! - **config**: configuration management from environment variables
//! - **client**: HTTP gateway to the record store (sync + async wrapper)
//! - **repositories**: the store contract the engines depend on
//! - **query**: filter resolution and the local quick filter
//! - **stats**: pure dashboard aggregation
//! - **timeline**: follow-up ordering and presentation markers
//! - **validation**: local form and attachment checks
//! - **state**: explicit view state and reload sequencing
//! - **services**: orchestration consumed by the presentation layer

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod repositories;
pub mod services;
pub mod state;
pub mod stats;
pub mod timeline;
pub mod validation;

pub use client::{AsyncCourrierApi, AsyncCourrierApiImpl, CourrierApiClient};
pub use config::Config;
pub use error::{ApiError, ApiResult, ConfigError, ValidationError};
pub use models::{Courrier, CourrierCreateRequest, CourrierType, Nature, Suivi,
    SuiviCreateRequest};
pub use query::{quick_filter, resolve, resolve_suivis, FilterSpec, SuiviFilterSpec};
pub use repositories::{
    ApiCourrierRepository, ApiSuiviRepository, CourrierRepository, SuiviRepository,
};
pub use services::{
    CourrierService, CourrierServiceImpl, SaveOutcome, ServiceError, SuiviService,
    SuiviServiceImpl,
};
pub use state::{ListState, LoadSequencer};
pub use stats::{summarize, DashboardStats};
pub use timeline::{annotate, order, TimelinePosition};
pub use validation::{validate_attachment, validate_courrier_draft, validate_suivi_draft,
    Attachment};
