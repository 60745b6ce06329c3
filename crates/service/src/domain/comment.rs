use serde::{Deserialize, Serialize};

use super::{overwrite, Record, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub description: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewComment {
    pub id: Option<String>,
    pub description: String,
    pub user_id: String,
    pub post_id: String,
}

/// Author and parent post may be reassigned.
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub description: Option<String>,
    pub user_id: Option<String>,
    pub post_id: Option<String>,
}

impl Record for Comment {
    const KIND: &'static str = "comment";
    type Draft = NewComment;
    type Patch = CommentPatch;

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

    fn draft_id(draft: &NewComment) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(id: String, draft: NewComment, now: Timestamp) -> Self {
        Self {
            id,
            description: draft.description,
            user_id: draft.user_id,
            post_id: draft.post_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: CommentPatch) {
        overwrite(&mut self.description, patch.description);
        overwrite(&mut self.user_id, patch.user_id);
        overwrite(&mut self.post_id, patch.post_id);
    }

    const REFERENCES: &'static [&'static str] = &["user_id", "post_id"];

    fn reference(&self, field: &str) -> Option<&str> {
        match field {
            "user_id" => Some(self.user_id.as_str()),
            "post_id" => Some(self.post_id.as_str()),
            _ => None,
        }
    }
}
