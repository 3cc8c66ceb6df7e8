pub mod auth;
pub mod client;
pub mod funeral;
pub mod invite;
pub mod membership;
pub mod organization;
pub mod rbac;
pub mod supplier;
