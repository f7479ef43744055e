use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered member
///
/// Members exist independently of any team and are referenced (never
/// owned) by team compositions. Identity is the `id` field; two records
/// with identical attributes but different ids are different members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub franchise: String,
    pub name: String,
    pub role: String,
}

impl Member {
    /// Creates a new member with a fresh id
    pub fn new(
        franchise: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            franchise: franchise.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Member {}
