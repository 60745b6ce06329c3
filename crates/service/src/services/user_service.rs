use crate::crud::CrudService;
use crate::domain::User;

/// Users. `email` is unique on every backend.
pub type UserService = CrudService<User>;
