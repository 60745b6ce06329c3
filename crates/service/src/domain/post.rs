use serde::{Deserialize, Serialize};

use super::{overwrite, Record, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Author; fixed at creation.
    pub user_id: String,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub id: Option<String>,
    pub user_id: String,
    pub caption: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub caption: Option<Option<String>>,
    pub location: Option<Option<String>>,
}

impl Record for Post {
    const KIND: &'static str = "post";
    type Draft = NewPost;
    type Patch = PostPatch;

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

    fn draft_id(draft: &NewPost) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(id: String, draft: NewPost, now: Timestamp) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            caption: draft.caption,
            location: draft.location,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: PostPatch) {
        overwrite(&mut self.caption, patch.caption);
        overwrite(&mut self.location, patch.location);
    }

    const REFERENCES: &'static [&'static str] = &["user_id"];

    fn reference(&self, field: &str) -> Option<&str> {
        match field {
            "user_id" => Some(self.user_id.as_str()),
            _ => None,
        }
    }
}
