// src/db/funeral_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::funeral::{
    CreateFuneralPayload, Funeral, FuneralContact, FuneralCost, FuneralDocument, FuneralNote,
    FuneralWish, UpdateFuneralPayload,
};

#[derive(Clone)]
pub struct FuneralRepository {
    pool: PgPool,
}

impl FuneralRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Funerais
    // ---

    pub async fn create_funeral(
        &self,
        organization_id: Uuid,
        created_by: Uuid,
        payload: &CreateFuneralPayload,
    ) -> Result<Funeral, AppError> {
        let funeral = sqlx::query_as::<_, Funeral>(
            r#"
            INSERT INTO funerals (
                organization_id, deceased_first_name, deceased_last_name,
                date_of_birth, date_of_death, place_of_death,
                funeral_date, location, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(&payload.deceased_first_name)
        .bind(&payload.deceased_last_name)
        .bind(payload.date_of_birth)
        .bind(payload.date_of_death)
        .bind(payload.place_of_death.as_deref())
        .bind(payload.funeral_date)
        .bind(payload.location.as_deref())
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(funeral)
    }

    pub async fn list_funerals(&self, organization_id: Uuid) -> Result<Vec<Funeral>, AppError> {
        let funerals = sqlx::query_as::<_, Funeral>(
            "SELECT * FROM funerals WHERE organization_id = $1 ORDER BY created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(funerals)
    }

    /// Sempre filtrado pela organização: um tenant nunca vê funerais de outro.
    pub async fn find_funeral(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<Option<Funeral>, AppError> {
        let funeral = sqlx::query_as::<_, Funeral>(
            "SELECT * FROM funerals WHERE organization_id = $1 AND id = $2",
        )
        .bind(organization_id)
        .bind(funeral_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(funeral)
    }

    pub async fn update_funeral(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        payload: &UpdateFuneralPayload,
    ) -> Result<Option<Funeral>, AppError> {
        let funeral = sqlx::query_as::<_, Funeral>(
            r#"
            UPDATE funerals SET
                deceased_first_name = COALESCE($3, deceased_first_name),
                deceased_last_name = COALESCE($4, deceased_last_name),
                date_of_birth = COALESCE($5, date_of_birth),
                date_of_death = COALESCE($6, date_of_death),
                place_of_death = COALESCE($7, place_of_death),
                status = COALESCE($8, status),
                funeral_date = COALESCE($9, funeral_date),
                location = COALESCE($10, location),
                updated_at = now()
            WHERE organization_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(funeral_id)
        .bind(payload.deceased_first_name.as_deref())
        .bind(payload.deceased_last_name.as_deref())
        .bind(payload.date_of_birth)
        .bind(payload.date_of_death)
        .bind(payload.place_of_death.as_deref())
        .bind(payload.status)
        .bind(payload.funeral_date)
        .bind(payload.location.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(funeral)
    }

    pub async fn delete_funeral(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM funerals WHERE organization_id = $1 AND id = $2")
            .bind(organization_id)
            .bind(funeral_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---
    // Contactos
    // ---

    /// Limpa o marcador de contacto principal de todas as linhas do funeral.
    /// Chamado dentro da mesma transação que define o novo principal.
    pub async fn clear_primary_contacts<'e, E>(
        &self,
        executor: E,
        funeral_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("UPDATE funeral_contacts SET is_primary = false WHERE funeral_id = $1")
            .bind(funeral_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn insert_contact<'e, E>(
        &self,
        executor: E,
        funeral_id: Uuid,
        client_id: Option<Uuid>,
        name: &str,
        relationship: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        is_primary: bool,
    ) -> Result<FuneralContact, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let contact = sqlx::query_as::<_, FuneralContact>(
            r#"
            INSERT INTO funeral_contacts (funeral_id, client_id, name, relationship, email, phone, is_primary)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(funeral_id)
        .bind(client_id)
        .bind(name)
        .bind(relationship)
        .bind(email)
        .bind(phone)
        .bind(is_primary)
        .fetch_one(executor)
        .await?;

        Ok(contact)
    }

    pub async fn list_contacts(&self, funeral_id: Uuid) -> Result<Vec<FuneralContact>, AppError> {
        let contacts = sqlx::query_as::<_, FuneralContact>(
            "SELECT * FROM funeral_contacts WHERE funeral_id = $1 ORDER BY is_primary DESC, created_at",
        )
        .bind(funeral_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    pub async fn delete_contact(&self, funeral_id: Uuid, contact_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM funeral_contacts WHERE funeral_id = $1 AND id = $2")
            .bind(funeral_id)
            .bind(contact_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---
    // Custos
    // ---

    pub async fn insert_cost(
        &self,
        funeral_id: Uuid,
        supplier_id: Option<Uuid>,
        description: &str,
        category: Option<&str>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<FuneralCost, AppError> {
        let cost = sqlx::query_as::<_, FuneralCost>(
            r#"
            INSERT INTO funeral_costs (funeral_id, supplier_id, description, category, quantity, unit_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(funeral_id)
        .bind(supplier_id)
        .bind(description)
        .bind(category)
        .bind(quantity)
        .bind(unit_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(cost)
    }

    pub async fn list_costs(&self, funeral_id: Uuid) -> Result<Vec<FuneralCost>, AppError> {
        let costs = sqlx::query_as::<_, FuneralCost>(
            "SELECT * FROM funeral_costs WHERE funeral_id = $1 ORDER BY created_at",
        )
        .bind(funeral_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(costs)
    }

    pub async fn delete_cost(&self, funeral_id: Uuid, cost_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM funeral_costs WHERE funeral_id = $1 AND id = $2")
            .bind(funeral_id)
            .bind(cost_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---
    // Documentos
    // ---

    pub async fn insert_document(
        &self,
        funeral_id: Uuid,
        name: &str,
        storage_path: &str,
        content_type: Option<&str>,
        uploaded_by: Uuid,
    ) -> Result<FuneralDocument, AppError> {
        let doc = sqlx::query_as::<_, FuneralDocument>(
            r#"
            INSERT INTO funeral_documents (funeral_id, name, storage_path, content_type, uploaded_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(funeral_id)
        .bind(name)
        .bind(storage_path)
        .bind(content_type)
        .bind(uploaded_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(doc)
    }

    pub async fn list_documents(&self, funeral_id: Uuid) -> Result<Vec<FuneralDocument>, AppError> {
        let docs = sqlx::query_as::<_, FuneralDocument>(
            "SELECT * FROM funeral_documents WHERE funeral_id = $1 ORDER BY created_at DESC",
        )
        .bind(funeral_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(docs)
    }

    pub async fn delete_document(&self, funeral_id: Uuid, document_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM funeral_documents WHERE funeral_id = $1 AND id = $2")
            .bind(funeral_id)
            .bind(document_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---
    // Notas
    // ---

    pub async fn insert_note(
        &self,
        funeral_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> Result<FuneralNote, AppError> {
        let note = sqlx::query_as::<_, FuneralNote>(
            r#"
            INSERT INTO funeral_notes (funeral_id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(funeral_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    pub async fn list_notes(&self, funeral_id: Uuid) -> Result<Vec<FuneralNote>, AppError> {
        let notes = sqlx::query_as::<_, FuneralNote>(
            "SELECT * FROM funeral_notes WHERE funeral_id = $1 ORDER BY created_at DESC",
        )
        .bind(funeral_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    pub async fn delete_note(&self, funeral_id: Uuid, note_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM funeral_notes WHERE funeral_id = $1 AND id = $2")
            .bind(funeral_id)
            .bind(note_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---
    // Desejos (checklist)
    // ---

    pub async fn insert_wish(
        &self,
        funeral_id: Uuid,
        section: &str,
        item_type: &str,
        description: &str,
        value: Option<&str>,
        position: i32,
    ) -> Result<FuneralWish, AppError> {
        let wish = sqlx::query_as::<_, FuneralWish>(
            r#"
            INSERT INTO funeral_wishes (funeral_id, section, item_type, description, value, position)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(funeral_id)
        .bind(section)
        .bind(item_type)
        .bind(description)
        .bind(value)
        .bind(position)
        .fetch_one(&self.pool)
        .await?;

        Ok(wish)
    }

    pub async fn list_wishes(&self, funeral_id: Uuid) -> Result<Vec<FuneralWish>, AppError> {
        let wishes = sqlx::query_as::<_, FuneralWish>(
            "SELECT * FROM funeral_wishes WHERE funeral_id = $1 ORDER BY section, position",
        )
        .bind(funeral_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(wishes)
    }

    pub async fn update_wish(
        &self,
        funeral_id: Uuid,
        wish_id: Uuid,
        value: Option<&str>,
        is_completed: Option<bool>,
        position: Option<i32>,
    ) -> Result<Option<FuneralWish>, AppError> {
        let wish = sqlx::query_as::<_, FuneralWish>(
            r#"
            UPDATE funeral_wishes SET
                value = COALESCE($3, value),
                is_completed = COALESCE($4, is_completed),
                position = COALESCE($5, position),
                updated_at = now()
            WHERE funeral_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(funeral_id)
        .bind(wish_id)
        .bind(value)
        .bind(is_completed)
        .bind(position)
        .fetch_optional(&self.pool)
        .await?;

        Ok(wish)
    }

    pub async fn delete_wish(&self, funeral_id: Uuid, wish_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM funeral_wishes WHERE funeral_id = $1 AND id = $2")
            .bind(funeral_id)
            .bind(wish_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
