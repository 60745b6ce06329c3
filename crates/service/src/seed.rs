//! Demo data, written through the services.
//!
//! Output is deterministic: the same plan always produces the same emails,
//! captions and comment authorship.

use chrono::NaiveDate;
use configs::SeedConfig;
use serde::Serialize;
use tracing::{info, instrument};

use crate::app::AppServices;
use crate::domain::{NewComment, NewImage, NewPermission, NewPost, NewRole, NewUser, Post, User};
use crate::errors::ServiceError;

const BASE_ROLES: [(&str, &str); 2] = [("admin", "Full access"), ("member", "Regular account")];
const BASE_PERMISSIONS: [&str; 3] = ["post:write", "comment:write", "user:admin"];
const CITIES: [&str; 4] = ["Hanoi", "Lisbon", "Osaka", "Toronto"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub users: usize,
    pub posts_per_user: usize,
    pub comments_per_post: usize,
    /// Delete every existing record first.
    pub reset: bool,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::from(&SeedConfig::default())
    }
}

impl From<&SeedConfig> for SeedPlan {
    fn from(cfg: &SeedConfig) -> Self {
        Self {
            users: cfg.users,
            posts_per_user: cfg.posts_per_user,
            comments_per_post: cfg.comments_per_post,
            reset: false,
        }
    }
}

/// What a seed run created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub images: usize,
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub roles: usize,
    pub permissions: usize,
}

#[instrument(skip(app))]
pub async fn seed(app: &AppServices, plan: SeedPlan) -> Result<SeedReport, ServiceError> {
    if plan.reset {
        clear(app).await?;
    }
    let mut report = SeedReport::default();

    report.roles = seed_roles(app).await?;
    report.permissions = seed_permissions(app).await?;

    let mut users: Vec<User> = Vec::with_capacity(plan.users);
    for i in 0..plan.users {
        let avatar = app
            .images
            .create(NewImage {
                url: format!("https://images.example.com/avatars/{i}.png"),
                public_id: Some(format!("avatars/{i}")),
                ..Default::default()
            })
            .await?;
        report.images += 1;
        users.push(app.users.create(seed_user(i, avatar.id)).await?);
        report.users += 1;
    }
    info!(event = "seed_users_created", users = report.users);

    let mut posts: Vec<(usize, Post)> = Vec::with_capacity(plan.users * plan.posts_per_user);
    for (ui, user) in users.iter().enumerate() {
        for j in 0..plan.posts_per_user {
            let post = app
                .posts
                .create(NewPost {
                    user_id: user.id.clone(),
                    caption: Some(format!("Post {} by {}", j + 1, user.name.as_deref().unwrap_or("someone"))),
                    location: (j % 3 == 0).then(|| CITIES[(ui + j) % CITIES.len()].to_string()),
                    ..Default::default()
                })
                .await?;
            posts.push((ui, post));
            report.posts += 1;
        }
    }

    // Commenters rotate through the other users; authors never comment on their own posts.
    let n = users.len();
    for (author, post) in &posts {
        for k in 0..plan.comments_per_post {
            let commenter = (author + 1 + k) % n;
            if commenter == *author {
                continue;
            }
            app.comments
                .create(NewComment {
                    description: format!("Comment {} from {}", k + 1, users[commenter].email),
                    user_id: users[commenter].id.clone(),
                    post_id: post.id.clone(),
                    ..Default::default()
                })
                .await?;
            report.comments += 1;
        }
    }

    info!(
        event = "seed_completed",
        images = report.images,
        users = report.users,
        posts = report.posts,
        comments = report.comments,
        roles = report.roles,
        permissions = report.permissions,
        "seed finished"
    );
    Ok(report)
}

fn seed_user(i: usize, image_id: String) -> NewUser {
    let month = (i % 12) as u32 + 1;
    let day = (i % 28) as u32 + 1;
    NewUser {
        email: format!("seed.user{i}@example.com"),
        password: format!("seed-password-{i}"),
        name: Some(format!("Seed User {i}")),
        birthday: NaiveDate::from_ymd_opt(1990 + (i % 20) as i32, month, day),
        link_social_media: Some(format!("https://social.example.com/seed.user{i}")),
        bio: Some(format!("Demo account number {i}.")),
        image_id: Some(image_id),
        ..Default::default()
    }
}

/// Base roles are created only when missing.
async fn seed_roles(app: &AppServices) -> Result<usize, ServiceError> {
    let existing = app.roles.list().await?;
    let mut created = 0;
    for (name, description) in BASE_ROLES {
        if existing.iter().any(|r| r.name == name) {
            continue;
        }
        app.roles
            .create(NewRole { name: name.into(), description: Some(description.into()), ..Default::default() })
            .await?;
        created += 1;
    }
    Ok(created)
}

async fn seed_permissions(app: &AppServices) -> Result<usize, ServiceError> {
    let existing = app.permissions.list().await?;
    let mut created = 0;
    for name in BASE_PERMISSIONS {
        if existing.iter().any(|p| p.name == name) {
            continue;
        }
        app.permissions.create(NewPermission { name: name.into(), ..Default::default() }).await?;
        created += 1;
    }
    Ok(created)
}

/// Remove everything, dependents first.
async fn clear(app: &AppServices) -> Result<(), ServiceError> {
    for c in app.comments.list().await? {
        app.comments.delete(&c.id).await?;
    }
    for p in app.posts.list().await? {
        app.posts.delete(&p.id).await?;
    }
    for u in app.users.list().await? {
        app.users.delete(&u.id).await?;
    }
    for i in app.images.list().await? {
        app.images.delete(&i.id).await?;
    }
    for r in app.roles.list().await? {
        app.roles.delete(&r.id).await?;
    }
    for p in app.permissions.list().await? {
        app.permissions.delete(&p.id).await?;
    }
    info!(event = "seed_reset", "existing records removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, skip_db_tests};

    fn small() -> SeedPlan {
        SeedPlan { users: 4, posts_per_user: 2, comments_per_post: 3, reset: false }
    }

    #[tokio::test]
    async fn seed_creates_planned_counts() -> Result<(), anyhow::Error> {
        let app = AppServices::in_memory();
        let report = seed(&app, small()).await?;
        assert_eq!(
            report,
            SeedReport { images: 4, users: 4, posts: 8, comments: 24, roles: 2, permissions: 3 }
        );

        let inv = app.inventory().await?;
        assert_eq!((inv.users, inv.posts, inv.comments, inv.images), (4, 8, 24, 4));

        let posts = app.posts.list().await?;
        for c in app.comments.list().await? {
            let post = posts.iter().find(|p| p.id == c.post_id).expect("comment post exists");
            assert_ne!(post.user_id, c.user_id);
        }
        Ok(())
    }

    #[tokio::test]
    async fn commenters_wrap_without_self_comments() -> Result<(), anyhow::Error> {
        let app = AppServices::in_memory();
        let plan = SeedPlan { users: 2, posts_per_user: 1, comments_per_post: 3, reset: false };
        let report = seed(&app, plan).await?;
        // k = 1 would land on the author for both posts
        assert_eq!(report.comments, 4);
        Ok(())
    }

    #[tokio::test]
    async fn reseed_with_reset_replaces_data() -> Result<(), anyhow::Error> {
        let app = AppServices::in_memory();
        seed(&app, small()).await?;

        let again = seed(&app, small()).await;
        assert!(matches!(again, Err(ServiceError::ConstraintViolation(_))));

        let report = seed(&app, SeedPlan { reset: true, ..small() }).await?;
        assert_eq!(report.roles, 2);
        let inv = app.inventory().await?;
        assert_eq!((inv.users, inv.roles, inv.permissions), (4, 2, 3));
        Ok(())
    }

    #[tokio::test]
    async fn base_roles_are_not_duplicated() -> Result<(), anyhow::Error> {
        let app = AppServices::in_memory();
        let plan = SeedPlan { users: 0, posts_per_user: 0, comments_per_post: 0, reset: false };
        assert_eq!(seed(&app, plan).await?.roles, 2);
        assert_eq!(seed(&app, plan).await?, SeedReport::default());
        Ok(())
    }

    #[tokio::test]
    async fn seed_into_database_with_reset() -> Result<(), anyhow::Error> {
        if skip_db_tests() || std::env::var("TEST_DATABASE_URL").is_ok() { return Ok(()); }
        let app = AppServices::with_database(get_db().await?);
        let plan = SeedPlan { users: 3, posts_per_user: 1, comments_per_post: 2, reset: true };
        seed(&app, plan).await?;
        let report = seed(&app, plan).await?;
        assert_eq!(report.comments, 6);
        assert_eq!(app.inventory().await?.users, 3);
        Ok(())
    }
}
