// src/services/membership_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::MembershipRepository,
    models::membership::{
        MemberRole, MemberStatus, MemberWithEmail, OrganizationMember, PermissionFlags,
    },
};

#[derive(Clone)]
pub struct MembershipService {
    membership_repo: MembershipRepository,
}

impl MembershipService {
    pub fn new(membership_repo: MembershipRepository) -> Self {
        Self { membership_repo }
    }

    pub async fn list_members(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<MemberWithEmail>, AppError> {
        self.membership_repo.list_members_with_email(organization_id).await
    }

    /// Ajusta cargo/estado/capacidades de um membro. Se só o cargo muda,
    /// as capacidades são rederivadas dos defaults desse cargo.
    pub async fn update_member(
        &self,
        organization_id: Uuid,
        target_user_id: Uuid,
        role: Option<MemberRole>,
        status: Option<MemberStatus>,
        flags: Option<PermissionFlags>,
    ) -> Result<OrganizationMember, AppError> {
        let flags = match (flags, role) {
            (Some(explicit), _) => Some(explicit),
            (None, Some(new_role)) => Some(PermissionFlags::for_role(new_role)),
            (None, None) => None,
        };

        self.membership_repo
            .update_member(organization_id, target_user_id, role, status, flags)
            .await
    }
}
