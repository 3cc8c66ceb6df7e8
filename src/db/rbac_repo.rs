// src/db/rbac_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::membership::MemberRole;
use crate::models::rbac::{PermissionDefinition, UserPermission, UserPermissionOverride};

#[derive(Clone)]
pub struct RbacRepository {
    pool: PgPool,
}

impl RbacRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_definitions(&self) -> Result<Vec<PermissionDefinition>, AppError> {
        let defs = sqlx::query_as::<_, PermissionDefinition>(
            "SELECT * FROM permission_definitions ORDER BY module, slug",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(defs)
    }

    pub async fn find_definition_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PermissionDefinition>, AppError> {
        let def = sqlx::query_as::<_, PermissionDefinition>(
            "SELECT * FROM permission_definitions WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(def)
    }

    /// Slugs padrão do cargo (tabela role_permissions).
    pub async fn role_permission_slugs(&self, role: MemberRole) -> Result<Vec<String>, AppError> {
        let slugs = sqlx::query_scalar::<_, String>(
            r#"
            SELECT p.slug
            FROM role_permissions rp
            JOIN permission_definitions p ON p.id = rp.permission_id
            WHERE rp.role = $1
            ORDER BY p.slug
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(slugs)
    }

    /// Sobreposições do utilizador na organização, com validade incluída.
    /// A expiração é avaliada no serviço, não aqui.
    pub async fn user_overrides(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<UserPermissionOverride>, AppError> {
        let overrides = sqlx::query_as::<_, UserPermissionOverride>(
            r#"
            SELECT p.slug, up.granted, up.expires_at
            FROM user_permissions up
            JOIN permission_definitions p ON p.id = up.permission_id
            WHERE up.organization_id = $1 AND up.user_id = $2
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(overrides)
    }

    pub async fn upsert_user_permission<'e, E>(
        &self,
        executor: E,
        organization_id: Uuid,
        user_id: Uuid,
        permission_id: Uuid,
        granted: bool,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<UserPermission, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as::<_, UserPermission>(
            r#"
            INSERT INTO user_permissions (organization_id, user_id, permission_id, granted, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (organization_id, user_id, permission_id) DO UPDATE SET
                granted = EXCLUDED.granted,
                expires_at = EXCLUDED.expires_at
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(permission_id)
        .bind(granted)
        .bind(expires_at)
        .fetch_one(executor)
        .await?;

        Ok(row)
    }
}
