use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams along with
/// their composition entries.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> Result<(), String>;

    /// Fetch all teams in insertion order
    ///
    /// The order matters downstream: exact-date lookups take the first
    /// match and the period filter preserves relative order.
    async fn find_all(&self) -> Result<Vec<Team>, String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;

    /// Check whether a team with this ID exists
    async fn exists(&self, id: Uuid) -> Result<bool, String>;

    /// Delete a team by ID
    async fn delete(&self, id: Uuid) -> Result<(), String>;
}
