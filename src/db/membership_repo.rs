// src/db/membership_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::membership::{
    MemberRole, MemberStatus, MemberWithEmail, OrganizationMember, PermissionFlags,
};

#[derive(Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_member<'e, E>(
        &self,
        executor: E,
        organization_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<OrganizationMember>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let member = sqlx::query_as::<_, OrganizationMember>(
            "SELECT * FROM organization_members WHERE organization_id = $1 AND user_id = $2",
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        Ok(member)
    }

    /// Primeira adesão ativa do utilizador, em qualquer organização.
    /// Usada pelo provisionador do onboarding para reaproveitar a organização.
    pub async fn find_active_membership<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Option<OrganizationMember>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let member = sqlx::query_as::<_, OrganizationMember>(
            r#"
            SELECT * FROM organization_members
            WHERE user_id = $1 AND status = 'active'
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        Ok(member)
    }

    /// Upsert com alvo de conflito (organization_id, user_id): uma nova
    /// submissão atualiza a linha em vez de duplicar.
    pub async fn upsert_member<'e, E>(
        &self,
        executor: E,
        organization_id: Uuid,
        user_id: Uuid,
        role: MemberRole,
        flags: PermissionFlags,
    ) -> Result<OrganizationMember, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let member = sqlx::query_as::<_, OrganizationMember>(
            r#"
            INSERT INTO organization_members (
                organization_id, user_id, role, status,
                can_manage_users, can_manage_funerals, can_manage_clients,
                can_manage_suppliers, can_view_financials, can_manage_settings
            )
            VALUES ($1, $2, $3, 'active', $4, $5, $6, $7, $8, $9)
            ON CONFLICT (organization_id, user_id) DO UPDATE SET
                role = EXCLUDED.role,
                status = 'active',
                can_manage_users = EXCLUDED.can_manage_users,
                can_manage_funerals = EXCLUDED.can_manage_funerals,
                can_manage_clients = EXCLUDED.can_manage_clients,
                can_manage_suppliers = EXCLUDED.can_manage_suppliers,
                can_view_financials = EXCLUDED.can_view_financials,
                can_manage_settings = EXCLUDED.can_manage_settings,
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(role)
        .bind(flags.can_manage_users)
        .bind(flags.can_manage_funerals)
        .bind(flags.can_manage_clients)
        .bind(flags.can_manage_suppliers)
        .bind(flags.can_view_financials)
        .bind(flags.can_manage_settings)
        .fetch_one(executor)
        .await?;

        Ok(member)
    }

    /// Inserção estrita, usada pelo fluxo de convites: membro duplicado é erro.
    pub async fn insert_member<'e, E>(
        &self,
        executor: E,
        organization_id: Uuid,
        user_id: Uuid,
        role: MemberRole,
        flags: PermissionFlags,
    ) -> Result<OrganizationMember, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, OrganizationMember>(
            r#"
            INSERT INTO organization_members (
                organization_id, user_id, role, status,
                can_manage_users, can_manage_funerals, can_manage_clients,
                can_manage_suppliers, can_view_financials, can_manage_settings
            )
            VALUES ($1, $2, $3, 'active', $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(role)
        .bind(flags.can_manage_users)
        .bind(flags.can_manage_funerals)
        .bind(flags.can_manage_clients)
        .bind(flags.can_manage_suppliers)
        .bind(flags.can_view_financials)
        .bind(flags.can_manage_settings)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::MemberAlreadyExists;
                }
            }
            e.into()
        })
    }

    pub async fn list_members_with_email(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<MemberWithEmail>, AppError> {
        let members = sqlx::query_as::<_, MemberWithEmail>(
            r#"
            SELECT m.id, m.organization_id, m.user_id, u.email, m.role, m.status,
                   m.can_manage_users, m.can_manage_funerals, m.can_manage_clients,
                   m.can_manage_suppliers, m.can_view_financials, m.can_manage_settings
            FROM organization_members m
            JOIN users u ON u.id = m.user_id
            WHERE m.organization_id = $1
            ORDER BY m.created_at
            "#,
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    pub async fn update_member(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
        role: Option<MemberRole>,
        status: Option<MemberStatus>,
        flags: Option<PermissionFlags>,
    ) -> Result<OrganizationMember, AppError> {
        let member = sqlx::query_as::<_, OrganizationMember>(
            r#"
            UPDATE organization_members SET
                role = COALESCE($3, role),
                status = COALESCE($4, status),
                can_manage_users = COALESCE($5, can_manage_users),
                can_manage_funerals = COALESCE($6, can_manage_funerals),
                can_manage_clients = COALESCE($7, can_manage_clients),
                can_manage_suppliers = COALESCE($8, can_manage_suppliers),
                can_view_financials = COALESCE($9, can_view_financials),
                can_manage_settings = COALESCE($10, can_manage_settings),
                updated_at = now()
            WHERE organization_id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(role)
        .bind(status)
        .bind(flags.map(|f| f.can_manage_users))
        .bind(flags.map(|f| f.can_manage_funerals))
        .bind(flags.map(|f| f.can_manage_clients))
        .bind(flags.map(|f| f.can_manage_suppliers))
        .bind(flags.map(|f| f.can_view_financials))
        .bind(flags.map(|f| f.can_manage_settings))
        .fetch_optional(&self.pool)
        .await?;

        member.ok_or(AppError::MemberNotFound)
    }
}
