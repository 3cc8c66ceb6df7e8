pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod funeral_repo;
pub use funeral_repo::FuneralRepository;
pub mod invite_repo;
pub use invite_repo::InviteRepository;
pub mod membership_repo;
pub use membership_repo::MembershipRepository;
pub mod organization_repo;
pub use organization_repo::OrganizationRepository;
pub mod rbac_repo;
pub use rbac_repo::RbacRepository;
pub mod supplier_repo;
pub use supplier_repo::SupplierRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
