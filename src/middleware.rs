pub mod auth;
pub mod guard;
pub mod org;
pub mod rbac;
