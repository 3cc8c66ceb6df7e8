// src/db/supplier_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::supplier::{
    CreateSupplierPayload, PricelistItem, Supplier, UpdateSupplierPayload,
};

#[derive(Clone)]
pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_supplier(
        &self,
        organization_id: Uuid,
        payload: &CreateSupplierPayload,
    ) -> Result<Supplier, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (organization_id, name, category, email, phone, website)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(&payload.name)
        .bind(payload.category.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.phone.as_deref())
        .bind(payload.website.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(supplier)
    }

    pub async fn list_suppliers(&self, organization_id: Uuid) -> Result<Vec<Supplier>, AppError> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT * FROM suppliers WHERE organization_id = $1 ORDER BY name",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(suppliers)
    }

    pub async fn find_supplier(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
    ) -> Result<Option<Supplier>, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>(
            "SELECT * FROM suppliers WHERE organization_id = $1 AND id = $2",
        )
        .bind(organization_id)
        .bind(supplier_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplier)
    }

    pub async fn update_supplier(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
        payload: &UpdateSupplierPayload,
    ) -> Result<Option<Supplier>, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            UPDATE suppliers SET
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                website = COALESCE($7, website),
                updated_at = now()
            WHERE organization_id = $1 AND id = $2
            RETURNING *
            "#,
        )
        .bind(organization_id)
        .bind(supplier_id)
        .bind(payload.name.as_deref())
        .bind(payload.category.as_deref())
        .bind(payload.email.as_deref())
        .bind(payload.phone.as_deref())
        .bind(payload.website.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplier)
    }

    pub async fn delete_supplier(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE organization_id = $1 AND id = $2")
            .bind(organization_id)
            .bind(supplier_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---
    // Tabela de preços
    // ---

    pub async fn insert_pricelist_item(
        &self,
        supplier_id: Uuid,
        description: &str,
        unit: Option<&str>,
        price: Decimal,
    ) -> Result<PricelistItem, AppError> {
        let item = sqlx::query_as::<_, PricelistItem>(
            r#"
            INSERT INTO supplier_pricelist_items (supplier_id, description, unit, price)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(supplier_id)
        .bind(description)
        .bind(unit)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn list_pricelist(&self, supplier_id: Uuid) -> Result<Vec<PricelistItem>, AppError> {
        let items = sqlx::query_as::<_, PricelistItem>(
            "SELECT * FROM supplier_pricelist_items WHERE supplier_id = $1 ORDER BY description",
        )
        .bind(supplier_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn delete_pricelist_item(
        &self,
        supplier_id: Uuid,
        item_id: Uuid,
    ) -> Result<bool, AppError> {
        let result =
            sqlx::query("DELETE FROM supplier_pricelist_items WHERE supplier_id = $1 AND id = $2")
                .bind(supplier_id)
                .bind(item_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
