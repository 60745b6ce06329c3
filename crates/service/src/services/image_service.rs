use crate::crud::CrudService;
use crate::domain::Image;

/// Hosted images, referenced by users as avatars.
pub type ImageService = CrudService<Image>;
