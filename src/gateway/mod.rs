//! Fetch gateway: the network-fetch-and-decode boundary.
//!
//! The view state controller only sees the [`AmphibianRepository`] trait,
//! so tests can swap the network for a scripted source.

mod error;
mod network;

use async_trait::async_trait;

use crate::model::Amphibian;

pub use error::FetchError;
pub use network::NetworkAmphibianRepository;

/// Source of the amphibian list.
///
/// Each call performs exactly one fetch. Implementations must not retry
/// or cache; the caller decides when to ask again.
#[async_trait]
pub trait AmphibianRepository: Send + Sync {
    /// Fetch every amphibian, in upstream order.
    async fn fetch_amphibians(&self) -> Result<Vec<Amphibian>, FetchError>;
}
