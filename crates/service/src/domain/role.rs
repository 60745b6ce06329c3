use serde::{Deserialize, Serialize};

use super::{overwrite, Record, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    /// Unique per storage.
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRole {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RolePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl Record for Role {
    const KIND: &'static str = "role";
    type Draft = NewRole;
    type Patch = RolePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    fn draft_id(draft: &NewRole) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(id: String, draft: NewRole, now: Timestamp) -> Self {
        Self { id, name: draft.name, description: draft.description, created_at: now, updated_at: now }
    }

    fn apply_patch(&mut self, patch: RolePatch) {
        overwrite(&mut self.name, patch.name);
        overwrite(&mut self.description, patch.description);
    }
}
