// src/db/client_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::client::{Client, CreateClientPayload, UpdateClientPayload};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_client(
        &self,
        organization_id: Uuid,
        payload: &CreateClientPayload,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (organization_id, first_name, last_name, email, phone, address, postal_code, city)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(payload.email.as_deref())
        .bind(payload.phone.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.postal_code.as_deref())
        .bind(payload.city.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn list_clients(&self, organization_id: Uuid) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE organization_id = $1 ORDER BY last_name, first_name",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn find_client(
        &self,
        organization_id: Uuid,
        client_id: Uuid,
    ) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE organization_id = $1 AND id = $2",
        )
        .bind(organization_id)
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn update_client(
        &self,
        organization_id: Uuid,
        client_id: Uuid,
        payload: &UpdateClientPayload,
    ) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients SET
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                address = COALESCE($7, address),
                postal_code = COALESCE($8, postal_code),
                city = COALESCE($9, city),
                updated_at = now()
            WHERE organization_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(client_id)
        .bind(payload.first_name.as_deref())
        .bind(payload.last_name.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.phone.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.postal_code.as_deref())
        .bind(payload.city.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn delete_client(
        &self,
        organization_id: Uuid,
        client_id: Uuid,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE organization_id = $1 AND id = $2")
            .bind(organization_id)
            .bind(client_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
