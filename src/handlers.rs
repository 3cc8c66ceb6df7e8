pub mod auth;
pub mod clients;
pub mod funerals;
pub mod invites;
pub mod members;
pub mod onboarding;
pub mod organizations;
pub mod pages;
pub mod rbac;
pub mod suppliers;
