use crate::crud::CrudService;
use crate::domain::Role;

pub type RoleService = CrudService<Role>;
