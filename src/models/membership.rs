// src/models/membership.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE member_role do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Admin,
    Editor,
    Viewer,
}

// Mapeia o CREATE TYPE member_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "member_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

/// As seis capacidades booleanas de um membro.
/// Derivadas do cargo no momento do convite/onboarding; podem ser
/// ajustadas depois por quem tem `can_manage_users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionFlags {
    pub can_manage_users: bool,
    pub can_manage_funerals: bool,
    pub can_manage_clients: bool,
    pub can_manage_suppliers: bool,
    pub can_view_financials: bool,
    pub can_manage_settings: bool,
}

impl PermissionFlags {
    /// Calcula as capacidades padrão para um cargo.
    ///
    /// Nota: `can_manage_funerals`, `can_manage_clients` e
    /// `can_manage_suppliers` são sempre verdadeiros para qualquer cargo
    /// convidado — comportamento herdado do fluxo de convites, mantido
    /// tal como observado.
    pub fn for_role(role: MemberRole) -> Self {
        let admin_or_owner = matches!(role, MemberRole::Owner | MemberRole::Admin);

        Self {
            can_manage_users: admin_or_owner,
            can_manage_funerals: true,
            can_manage_clients: true,
            can_manage_suppliers: true,
            can_view_financials: admin_or_owner,
            can_manage_settings: matches!(role, MemberRole::Owner),
        }
    }

    /// Todas as capacidades ligadas; usado para o dono criado no onboarding.
    pub fn all() -> Self {
        Self {
            can_manage_users: true,
            can_manage_funerals: true,
            can_manage_clients: true,
            can_manage_suppliers: true,
            can_view_financials: true,
            can_manage_settings: true,
        }
    }
}

// O que sai do banco (Tabela organization_members)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub can_manage_users: bool,
    pub can_manage_funerals: bool,
    pub can_manage_clients: bool,
    pub can_manage_suppliers: bool,
    pub can_view_financials: bool,
    pub can_manage_settings: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrganizationMember {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

// Resposta de listagem (membro + e-mail do utilizador)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithEmail {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub can_manage_users: bool,
    pub can_manage_funerals: bool,
    pub can_manage_clients: bool,
    pub can_manage_suppliers: bool,
    pub can_view_financials: bool,
    pub can_manage_settings: bool,
}

// O Payload para ajustar cargo/capacidades de um membro
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberPayload {
    pub role: Option<MemberRole>,
    pub status: Option<MemberStatus>,
    pub flags: Option<PermissionFlags>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_gets_every_capability() {
        let flags = PermissionFlags::for_role(MemberRole::Owner);
        assert!(flags.can_manage_users);
        assert!(flags.can_view_financials);
        assert!(flags.can_manage_settings);
        assert!(flags.can_manage_funerals);
        assert!(flags.can_manage_clients);
        assert!(flags.can_manage_suppliers);
    }

    #[test]
    fn admin_cannot_manage_settings() {
        let flags = PermissionFlags::for_role(MemberRole::Admin);
        assert!(flags.can_manage_users);
        assert!(flags.can_view_financials);
        assert!(!flags.can_manage_settings);
    }

    #[test]
    fn viewer_never_manages_users_or_settings() {
        let flags = PermissionFlags::for_role(MemberRole::Viewer);
        assert!(!flags.can_manage_users);
        assert!(!flags.can_manage_settings);
        assert!(!flags.can_view_financials);
        // Assimetria mantida tal como observada no fluxo de convites.
        assert!(flags.can_manage_funerals);
        assert!(flags.can_manage_clients);
        assert!(flags.can_manage_suppliers);
    }

    #[test]
    fn editor_matches_viewer_on_gated_flags() {
        let flags = PermissionFlags::for_role(MemberRole::Editor);
        assert!(!flags.can_manage_users);
        assert!(!flags.can_view_financials);
        assert!(!flags.can_manage_settings);
    }
}
