// src/db/organization_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::organization::{Organization, Profile, UpdateOrganizationPayload};

#[derive(Clone)]
pub struct OrganizationRepository {
    pool: PgPool,
}

impl OrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_organization<'e, E>(
        &self,
        executor: E,
        name: &str,
        address: Option<&str>,
        postal_code: Option<&str>,
        city: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Organization, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (name, address, postal_code, city, phone, email, billing_email)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(postal_code)
        .bind(city)
        .bind(phone)
        .bind(email)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::OrganizationNameTaken;
                }
            }
            e.into()
        })
    }

    pub async fn find_organization(&self, id: Uuid) -> Result<Option<Organization>, AppError> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(org)
    }

    pub async fn update_organization(
        &self,
        id: Uuid,
        payload: &UpdateOrganizationPayload,
    ) -> Result<Option<Organization>, AppError> {
        sqlx::query_as::<_, Organization>(
            r#"
            UPDATE organizations SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                postal_code = COALESCE($4, postal_code),
                city = COALESCE($5, city),
                phone = COALESCE($6, phone),
                email = COALESCE($7, email),
                billing_email = COALESCE($8, billing_email),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.postal_code.as_deref())
        .bind(payload.city.as_deref())
        .bind(payload.phone.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.billing_email.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::OrganizationNameTaken;
                }
            }
            e.into()
        })
    }

    pub async fn find_profile<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Option<Profile>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(executor)
            .await?;

        Ok(profile)
    }

    /// Consulta usada pelo route guard. Devolve None quando o perfil
    /// ainda não existe — o guard trata isso como "precisa de onboarding".
    pub async fn onboarding_completed(&self, user_id: Uuid) -> Result<Option<bool>, AppError> {
        let row = sqlx::query_scalar::<_, bool>(
            "SELECT onboarding_completed FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn insert_profile<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (user_id, first_name, last_name, phone, onboarding_completed)
            VALUES ($1, $2, $3, $4, true)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }

    pub async fn update_profile<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET first_name = $2, last_name = $3, phone = $4, updated_at = now()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }

    /// Preenche o vínculo com a organização e marca o onboarding como feito.
    pub async fn link_profile_to_organization<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<Profile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET organization_id = $2, onboarding_completed = true, updated_at = now()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(organization_id)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }
}
