use serde::{Deserialize, Serialize};

use super::{overwrite, Record, Timestamp};

/// Hosted picture, e.g. a user avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    /// Asset id at the hosting provider.
    pub public_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewImage {
    pub id: Option<String>,
    pub url: String,
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ImagePatch {
    pub url: Option<String>,
    pub public_id: Option<Option<String>>,
}

impl Record for Image {
    const KIND: &'static str = "image";
    type Draft = NewImage;
    type Patch = ImagePatch;

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

    fn draft_id(draft: &NewImage) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(id: String, draft: NewImage, now: Timestamp) -> Self {
        Self { id, url: draft.url, public_id: draft.public_id, created_at: now, updated_at: now }
    }

    fn apply_patch(&mut self, patch: ImagePatch) {
        overwrite(&mut self.url, patch.url);
        overwrite(&mut self.public_id, patch.public_id);
    }
}
