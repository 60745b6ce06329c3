use serde::{Deserialize, Serialize};

use super::{overwrite, Record, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    /// Unique per storage, e.g. `post:write`.
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPermission {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct PermissionPatch {
    pub name: Option<String>,
}

impl Record for Permission {
    const KIND: &'static str = "permission";
    type Draft = NewPermission;
    type Patch = PermissionPatch;

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

    fn draft_id(draft: &NewPermission) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(id: String, draft: NewPermission, now: Timestamp) -> Self {
        Self { id, name: draft.name, created_at: now, updated_at: now }
    }

    fn apply_patch(&mut self, patch: PermissionPatch) {
        overwrite(&mut self.name, patch.name);
    }
}
