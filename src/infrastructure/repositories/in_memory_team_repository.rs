use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// In-memory implementation of TeamRepository
///
/// Insertion order is preserved: `find_all` feeds the aggregate engine,
/// whose exact-date lookup takes the first match and whose period filter
/// keeps relative order.
#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        let mut teams = self.teams.write().await;

        match teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => *existing = team.clone(),
            None => teams.push(team.clone()),
        }

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        Ok(self.teams.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self
            .teams
            .read()
            .await
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, String> {
        Ok(self.teams.read().await.iter().any(|t| t.id() == id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let mut teams = self.teams.write().await;
        let before = teams.len();
        teams.retain(|t| t.id() != id);

        if teams.len() == before {
            return Err(format!("Team not found: {}", id));
        }

        Ok(())
    }
}
