use crate::crud::CrudService;
use crate::domain::Comment;
use crate::errors::ServiceError;

/// Comments. Both the author and the post can be reassigned.
pub type CommentService = CrudService<Comment>;

impl CommentService {
    /// Comments under `post_id`, ordered by id.
    pub async fn list_by_post(&self, post_id: &str) -> Result<Vec<Comment>, ServiceError> {
        self.list_referencing("post_id", post_id).await
    }

    /// Comments written by `user_id`, ordered by id.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Comment>, ServiceError> {
        self.list_referencing("user_id", user_id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::app::AppServices;
    use crate::domain::{CommentPatch, NewComment, NewPost, NewUser};
    use crate::test_support::{get_db, skip_db_tests, unique};

    async fn move_comment(app: &AppServices) -> Result<(), anyhow::Error> {
        let alice = app.users.create(NewUser { email: format!("{}@x.com", unique("alice")), ..Default::default() }).await?;
        let bob = app.users.create(NewUser { email: format!("{}@x.com", unique("bob")), ..Default::default() }).await?;
        let first = app.posts.create(NewPost { user_id: alice.id.clone(), ..Default::default() }).await?;
        let second = app.posts.create(NewPost { user_id: alice.id.clone(), ..Default::default() }).await?;

        let comment = app
            .comments
            .create(NewComment { description: "nice".into(), user_id: bob.id.clone(), post_id: first.id.clone(), ..Default::default() })
            .await?;
        assert_eq!(app.comments.get_by_id(&comment.id).await?, Some(comment.clone()));

        let moved = app
            .comments
            .update(&comment.id, CommentPatch { post_id: Some(second.id.clone()), ..Default::default() })
            .await?;
        assert_eq!(moved.post_id, second.id);
        assert_eq!(moved.user_id, bob.id);
        assert_eq!(moved.description, "nice");

        let edited = app
            .comments
            .update(&comment.id, CommentPatch { description: Some("great".into()), user_id: Some(alice.id.clone()), ..Default::default() })
            .await?;
        assert_eq!(edited.description, "great");
        assert_eq!(edited.user_id, alice.id);
        assert!(edited.updated_at > moved.updated_at);

        app.comments.delete(&comment.id).await?;
        assert!(app.comments.get_by_id(&comment.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn move_comment_in_memory() -> Result<(), anyhow::Error> {
        move_comment(&AppServices::in_memory()).await
    }

    #[tokio::test]
    async fn move_comment_database() -> Result<(), anyhow::Error> {
        if skip_db_tests() { return Ok(()); }
        move_comment(&AppServices::with_database(get_db().await?)).await
    }

    #[tokio::test]
    async fn update_missing_comment_is_not_found() {
        let app = AppServices::in_memory();
        let err = app.comments.update("missing", CommentPatch::default()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    async fn comments_by_post_and_author(app: &AppServices) -> Result<(), anyhow::Error> {
        let alice = app.users.create(NewUser { email: format!("{}@x.com", unique("alice")), ..Default::default() }).await?;
        let bob = app.users.create(NewUser { email: format!("{}@x.com", unique("bob")), ..Default::default() }).await?;
        let post = app.posts.create(NewPost { user_id: alice.id.clone(), ..Default::default() }).await?;
        let quiet = app.posts.create(NewPost { user_id: alice.id.clone(), ..Default::default() }).await?;

        let mut on_post = Vec::new();
        for (i, who) in [&bob, &alice, &bob].into_iter().enumerate() {
            let draft = NewComment {
                description: format!("c{i}"),
                user_id: who.id.clone(),
                post_id: post.id.clone(),
                ..Default::default()
            };
            on_post.push(app.comments.create(draft).await?);
        }
        on_post.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(app.comments.list_by_post(&post.id).await?, on_post);
        assert!(app.comments.list_by_post(&quiet.id).await?.is_empty());
        let by_bob = app.comments.list_by_user(&bob.id).await?;
        assert_eq!(by_bob.len(), 2);
        assert!(by_bob.iter().all(|c| c.user_id == bob.id));
        Ok(())
    }

    #[tokio::test]
    async fn comments_by_post_and_author_in_memory() -> Result<(), anyhow::Error> {
        comments_by_post_and_author(&AppServices::in_memory()).await
    }

    #[tokio::test]
    async fn comments_by_post_and_author_database() -> Result<(), anyhow::Error> {
        if skip_db_tests() { return Ok(()); }
        comments_by_post_and_author(&AppServices::with_database(get_db().await?)).await
    }
}
