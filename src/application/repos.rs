//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::CafeRecord;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Column values for a cafe that does not exist yet. The store assigns
/// the id.
#[derive(Debug, Clone)]
pub struct CreateCafeParams {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

#[async_trait]
pub trait CafesRepo: Send + Sync {
    async fn insert(&self, params: CreateCafeParams) -> Result<CafeRecord, RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CafeRecord>, RepoError>;

    async fn list_all(&self) -> Result<Vec<CafeRecord>, RepoError>;

    /// One cafe chosen uniformly at random, `None` when the table is empty.
    async fn random(&self) -> Result<Option<CafeRecord>, RepoError>;

    /// Cafes whose `location` column equals `location` exactly. The match
    /// is case-sensitive; no trimming or normalization happens here.
    async fn filter_by_location(&self, location: &str) -> Result<Vec<CafeRecord>, RepoError>;

    /// Overwrite `coffee_price` on one row, leaving every other column
    /// alone. `None` when no row has that id.
    async fn update_price(
        &self,
        id: i64,
        new_price: &str,
    ) -> Result<Option<CafeRecord>, RepoError>;
}
