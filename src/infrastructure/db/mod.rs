use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::people::PersonRow;

pub mod connection;
mod people;

pub use people::PeopleRepository;

/// Durable store for loaded people.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert one validated row.
    async fn insert_person(&self, person: &PersonRow) -> Result<()>;

    /// All stored age values, unordered.
    async fn all_ages(&self) -> Result<Vec<i64>>;
}
