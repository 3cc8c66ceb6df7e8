// src/db/invite_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::invite::OrganizationInvite;
use crate::models::membership::MemberRole;

#[derive(Clone)]
pub struct InviteRepository {
    pool: PgPool,
}

impl InviteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_invite<'e, E>(
        &self,
        executor: E,
        organization_id: Uuid,
        email: &str,
        role: MemberRole,
        invited_by: Uuid,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<OrganizationInvite, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invite = sqlx::query_as::<_, OrganizationInvite>(
            r#"
            INSERT INTO organization_invites (organization_id, email, role, invited_by, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(email)
        .bind(role)
        .bind(invited_by)
        .bind(expires_at)
        .fetch_one(executor)
        .await?;

        Ok(invite)
    }

    /// Busca pelo token sem filtrar o estado: quem decide se o convite
    /// ainda é aceitável é `OrganizationInvite::is_pending`.
    pub async fn find_by_token<'e, E>(
        &self,
        executor: E,
        token: Uuid,
    ) -> Result<Option<OrganizationInvite>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let invite = sqlx::query_as::<_, OrganizationInvite>(
            "SELECT * FROM organization_invites WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(executor)
        .await?;

        Ok(invite)
    }

    pub async fn mark_accepted<'e, E>(&self, executor: E, invite_id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("UPDATE organization_invites SET accepted_at = now() WHERE id = $1")
            .bind(invite_id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
