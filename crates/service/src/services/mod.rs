//! Per-entity services. Each one is the generic [`CrudService`] bound to its record.
//!
//! [`CrudService`]: crate::crud::CrudService

pub mod comment_service;
pub mod image_service;
pub mod permission_service;
pub mod post_service;
pub mod role_service;
pub mod user_service;

pub use comment_service::CommentService;
pub use image_service::ImageService;
pub use permission_service::PermissionService;
pub use post_service::PostService;
pub use role_service::RoleService;
pub use user_service::UserService;
