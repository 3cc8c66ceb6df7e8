// src/services/supplier_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::SupplierRepository,
    models::supplier::{
        CreatePricelistItemPayload, CreateSupplierPayload, PricelistItem, Supplier,
        UpdateSupplierPayload,
    },
};

#[derive(Clone)]
pub struct SupplierService {
    supplier_repo: SupplierRepository,
}

impl SupplierService {
    pub fn new(supplier_repo: SupplierRepository) -> Self {
        Self { supplier_repo }
    }

    pub async fn create_supplier(
        &self,
        organization_id: Uuid,
        payload: &CreateSupplierPayload,
    ) -> Result<Supplier, AppError> {
        self.supplier_repo.create_supplier(organization_id, payload).await
    }

    pub async fn list_suppliers(&self, organization_id: Uuid) -> Result<Vec<Supplier>, AppError> {
        self.supplier_repo.list_suppliers(organization_id).await
    }

    pub async fn update_supplier(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
        payload: &UpdateSupplierPayload,
    ) -> Result<Supplier, AppError> {
        self.supplier_repo
            .update_supplier(organization_id, supplier_id, payload)
            .await?
            .ok_or(AppError::SupplierNotFound)
    }

    pub async fn delete_supplier(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = self.supplier_repo.delete_supplier(organization_id, supplier_id).await?;
        if !deleted {
            return Err(AppError::SupplierNotFound);
        }
        Ok(())
    }

    // ---
    // Tabela de preços
    // ---

    pub async fn add_pricelist_item(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
        payload: &CreatePricelistItemPayload,
    ) -> Result<PricelistItem, AppError> {
        // O fornecedor tem de pertencer a esta organização.
        self.supplier_repo
            .find_supplier(organization_id, supplier_id)
            .await?
            .ok_or(AppError::SupplierNotFound)?;

        self.supplier_repo
            .insert_pricelist_item(
                supplier_id,
                &payload.description,
                payload.unit.as_deref(),
                payload.price,
            )
            .await
    }

    pub async fn list_pricelist(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
    ) -> Result<Vec<PricelistItem>, AppError> {
        self.supplier_repo
            .find_supplier(organization_id, supplier_id)
            .await?
            .ok_or(AppError::SupplierNotFound)?;

        self.supplier_repo.list_pricelist(supplier_id).await
    }

    pub async fn delete_pricelist_item(
        &self,
        organization_id: Uuid,
        supplier_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), AppError> {
        self.supplier_repo
            .find_supplier(organization_id, supplier_id)
            .await?
            .ok_or(AppError::SupplierNotFound)?;

        let deleted = self.supplier_repo.delete_pricelist_item(supplier_id, item_id).await?;
        if !deleted {
            return Err(AppError::SupplierNotFound);
        }
        Ok(())
    }
}
