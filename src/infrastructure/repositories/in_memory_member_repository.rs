use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::repositories::MemberRepository;

/// In-memory implementation of MemberRepository
///
/// Keeps members in registration order inside a `RwLock<Vec>`; each read
/// hands the caller a cloned snapshot, so computations never observe a
/// half-applied write.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: RwLock<Vec<Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn save(&self, member: &Member) -> Result<(), String> {
        let mut members = self.members.write().await;

        match members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => *existing = member.clone(),
            None => members.push(member.clone()),
        }

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Member>, String> {
        Ok(self.members.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, String> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Member>, String> {
        let members = self.members.read().await;

        Ok(ids
            .iter()
            .filter_map(|id| members.iter().find(|m| m.id == *id).cloned())
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Member>, String> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .find(|m| m.name == name)
            .cloned())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, String> {
        Ok(self.members.read().await.iter().any(|m| m.id == id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let mut members = self.members.write().await;
        let before = members.len();
        members.retain(|m| m.id != id);

        if members.len() == before {
            return Err(format!("Member not found: {}", id));
        }

        Ok(())
    }
}
