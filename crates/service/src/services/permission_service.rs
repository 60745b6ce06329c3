use crate::crud::CrudService;
use crate::domain::Permission;

pub type PermissionService = CrudService<Permission>;
