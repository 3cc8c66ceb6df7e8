// src/services/rbac_service.rs

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::RbacRepository,
    models::{
        membership::MemberRole,
        rbac::{PermissionDefinition, UserPermission, UserPermissionOverride},
    },
};

#[derive(Clone)]
pub struct RbacService {
    rbac_repo: RbacRepository,
}

impl RbacService {
    pub fn new(rbac_repo: RbacRepository) -> Self {
        Self { rbac_repo }
    }

    pub async fn list_definitions(&self) -> Result<Vec<PermissionDefinition>, AppError> {
        self.rbac_repo.list_definitions().await
    }

    /// Permissões efetivas do membro: defaults do cargo, mais concessões,
    /// menos revogações. Sobreposições expiradas são ignoradas.
    pub async fn effective_permissions(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
        role: MemberRole,
    ) -> Result<Vec<String>, AppError> {
        let defaults = self.rbac_repo.role_permission_slugs(role).await?;
        let overrides = self.rbac_repo.user_overrides(organization_id, user_id).await?;

        Ok(merge_permissions(defaults, &overrides, Utc::now()))
    }

    /// Cria/atualiza uma sobreposição por utilizador. O slug tem de existir
    /// no catálogo.
    pub async fn upsert_override(
        &self,
        pool: &sqlx::PgPool,
        organization_id: Uuid,
        user_id: Uuid,
        permission_slug: &str,
        granted: bool,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<UserPermission, AppError> {
        let definition = self
            .rbac_repo
            .find_definition_by_slug(permission_slug)
            .await?
            .ok_or_else(|| AppError::PermissionNotFound(permission_slug.to_string()))?;

        self.rbac_repo
            .upsert_user_permission(pool, organization_id, user_id, definition.id, granted, expires_at)
            .await
    }
}

/// Função pura de fusão: mantém a ordem determinística (BTreeSet) para que
/// respostas iguais saiam sempre iguais.
pub fn merge_permissions(
    role_defaults: Vec<String>,
    overrides: &[UserPermissionOverride],
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut effective: BTreeSet<String> = role_defaults.into_iter().collect();

    for o in overrides {
        let expired = o.expires_at.is_some_and(|at| at <= now);
        if expired {
            continue;
        }

        if o.granted {
            effective.insert(o.slug.clone());
        } else {
            effective.remove(&o.slug);
        }
    }

    effective.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ov(slug: &str, granted: bool, expires_at: Option<DateTime<Utc>>) -> UserPermissionOverride {
        UserPermissionOverride { slug: slug.to_string(), granted, expires_at }
    }

    #[test]
    fn grant_adds_to_role_defaults() {
        let now = Utc::now();
        let defaults = vec!["funerals:manage".to_string()];
        let overrides = [ov("finance:view", true, None)];

        let effective = merge_permissions(defaults, &overrides, now);
        assert_eq!(effective, vec!["finance:view", "funerals:manage"]);
    }

    #[test]
    fn revoke_removes_role_default() {
        let now = Utc::now();
        let defaults = vec!["funerals:manage".to_string(), "clients:manage".to_string()];
        let overrides = [ov("funerals:manage", false, None)];

        let effective = merge_permissions(defaults, &overrides, now);
        assert_eq!(effective, vec!["clients:manage"]);
    }

    #[test]
    fn expired_override_is_ignored() {
        let now = Utc::now();
        let defaults = vec!["funerals:manage".to_string()];
        let overrides = [
            ov("finance:view", true, Some(now - Duration::hours(1))),
            ov("funerals:manage", false, Some(now - Duration::minutes(5))),
        ];

        // Concessão expirada não entra; revogação expirada não retira.
        let effective = merge_permissions(defaults, &overrides, now);
        assert_eq!(effective, vec!["funerals:manage"]);
    }

    #[test]
    fn unexpired_override_with_future_expiry_applies() {
        let now = Utc::now();
        let defaults = vec![];
        let overrides = [ov("settings:manage", true, Some(now + Duration::days(1)))];

        let effective = merge_permissions(defaults, &overrides, now);
        assert_eq!(effective, vec!["settings:manage"]);
    }
}
