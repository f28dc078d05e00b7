//! Repository layer: typed gateways to the remote record store.
//!
//! The traits are the contract the engines depend on; the `Api*`
//! implementations delegate to the async HTTP client.

mod api_courrier_repository;
mod api_suivi_repository;
mod traits;

pub use api_courrier_repository::ApiCourrierRepository;
pub use api_suivi_repository::ApiSuiviRepository;
pub use traits::{CourrierRepository, SuiviRepository};
