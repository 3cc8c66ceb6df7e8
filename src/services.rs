pub mod auth;
pub mod client_service;
pub mod funeral_service;
pub mod invite_service;
pub mod membership_service;
pub mod onboarding_service;
pub mod rbac_service;
pub mod supplier_service;
