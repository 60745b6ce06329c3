use crate::crud::CrudService;
use crate::domain::Post;
use crate::errors::ServiceError;

/// Posts. The author (`user_id`) is fixed at creation.
pub type PostService = CrudService<Post>;

impl PostService {
    /// Posts written by `user_id`, ordered by id. Empty when the user has none or does not exist.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Post>, ServiceError> {
        self.list_referencing("user_id", user_id).await
    }
}
