use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{overwrite, Record, Timestamp};

/// Account holder. `email` is unique per storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub link_social_media: Option<String>,
    pub bio: Option<String>,
    /// Avatar.
    pub image_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub id: Option<String>,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub link_social_media: Option<String>,
    pub bio: Option<String>,
    pub image_id: Option<String>,
}

/// Nullable fields take `Some(None)` to clear.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<Option<String>>,
    pub birthday: Option<Option<NaiveDate>>,
    pub link_social_media: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub image_id: Option<Option<String>>,
}

impl Record for User {
    const KIND: &'static str = "user";
    type Draft = NewUser;
    type Patch = UserPatch;

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

    fn draft_id(draft: &NewUser) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(id: String, draft: NewUser, now: Timestamp) -> Self {
        Self {
            id,
            email: draft.email,
            password: draft.password,
            name: draft.name,
            birthday: draft.birthday,
            link_social_media: draft.link_social_media,
            bio: draft.bio,
            image_id: draft.image_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        overwrite(&mut self.email, patch.email);
        overwrite(&mut self.password, patch.password);
        overwrite(&mut self.name, patch.name);
        overwrite(&mut self.birthday, patch.birthday);
        overwrite(&mut self.link_social_media, patch.link_social_media);
        overwrite(&mut self.bio, patch.bio);
        overwrite(&mut self.image_id, patch.image_id);
    }

    const REFERENCES: &'static [&'static str] = &["image_id"];

    fn reference(&self, field: &str) -> Option<&str> {
        match field {
            "image_id" => self.image_id.as_deref(),
            _ => None,
        }
    }
}
