//! Domain records: what callers create, read, patch and delete.
//!
//! Every record carries a string id and two timestamps. The [`Record`] trait
//! is the contract the generic repository and service layers are written
//! against; each entity module implements it with its own update whitelist.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use uuid::Uuid;

pub mod comment;
pub mod image;
pub mod permission;
pub mod post;
pub mod role;
pub mod user;

pub use comment::{Comment, CommentPatch, NewComment};
pub use image::{Image, ImagePatch, NewImage};
pub use permission::{NewPermission, Permission, PermissionPatch};
pub use post::{NewPost, Post, PostPatch};
pub use role::{NewRole, Role, RolePatch};
pub use user::{NewUser, User, UserPatch};

/// UTC instant stored on every record.
pub type Timestamp = DateTime<Utc>;

/// Current time at microsecond precision, the finest unit Postgres keeps.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Modification stamp guaranteed to be later than `previous`.
pub fn next_modification(previous: Timestamp) -> Timestamp {
    let now = now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}

/// Fresh identifier for records created without one.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A persisted entity with identity, timestamps and a fixed update whitelist.
pub trait Record: Clone + Send + Sync + 'static {
    /// Collection name used in logs and error messages.
    const KIND: &'static str;

    /// Creation input; may carry a caller-chosen id.
    type Draft: Send + 'static;

    /// Update input; only whitelisted fields exist on it.
    type Patch: Send + 'static;

    fn id(&self) -> &str;
    fn created_at(&self) -> Timestamp;
    fn updated_at(&self) -> Timestamp;
    fn set_updated_at(&mut self, at: Timestamp);

    fn draft_id(draft: &Self::Draft) -> Option<&str>;

    /// Build the record from its draft; `created_at == updated_at == now`.
    fn from_draft(id: String, draft: Self::Draft, now: Timestamp) -> Self;

    /// Overwrite the whitelisted fields present in `patch`.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Fields holding the id of another record.
    const REFERENCES: &'static [&'static str] = &[];

    /// Value of the reference field `field`, if set.
    fn reference(&self, _field: &str) -> Option<&str> {
        None
    }
}

/// Overwrite `slot` when the patch carries a value.
pub(crate) fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
