use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::member::Member;

/// Repository trait for Member records
///
/// Defines the contract for persisting and retrieving members.
/// Implementations should handle storage-specific details.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a member (insert or update)
    async fn save(&self, member: &Member) -> Result<(), String>;

    /// Fetch all members in registration order
    async fn find_all(&self) -> Result<Vec<Member>, String>;

    /// Find a member by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, String>;

    /// Find every member whose id is in `ids`
    ///
    /// Missing ids are simply absent from the result; resolution checks
    /// are the caller's job.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Member>, String>;

    /// Find a member by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Member>, String>;

    /// Check whether a member with this ID exists
    async fn exists(&self, id: Uuid) -> Result<bool, String>;

    /// Delete a member by ID
    async fn delete(&self, id: Uuid) -> Result<(), String>;
}
