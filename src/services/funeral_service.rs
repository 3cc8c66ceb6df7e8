// src/services/funeral_service.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::FuneralRepository,
    models::funeral::{
        CreateContactPayload, CreateCostPayload, CreateDocumentPayload, CreateFuneralPayload,
        CreateNotePayload, CreateWishPayload, Funeral, FuneralContact, FuneralCost,
        FuneralDocument, FuneralNote, FuneralWish, UpdateFuneralPayload, UpdateWishPayload,
    },
};

#[derive(Clone)]
pub struct FuneralService {
    funeral_repo: FuneralRepository,
    pool: PgPool,
}

impl FuneralService {
    pub fn new(funeral_repo: FuneralRepository, pool: PgPool) -> Self {
        Self { funeral_repo, pool }
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
        self.funeral_repo
            .create_funeral(organization_id, created_by, payload)
            .await
    }

    pub async fn list_funerals(&self, organization_id: Uuid) -> Result<Vec<Funeral>, AppError> {
        self.funeral_repo.list_funerals(organization_id).await
    }

    pub async fn get_funeral(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<Funeral, AppError> {
        self.funeral_repo
            .find_funeral(organization_id, funeral_id)
            .await?
            .ok_or(AppError::FuneralNotFound)
    }

    pub async fn update_funeral(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        payload: &UpdateFuneralPayload,
    ) -> Result<Funeral, AppError> {
        self.funeral_repo
            .update_funeral(organization_id, funeral_id, payload)
            .await?
            .ok_or(AppError::FuneralNotFound)
    }

    pub async fn delete_funeral(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = self.funeral_repo.delete_funeral(organization_id, funeral_id).await?;
        if !deleted {
            return Err(AppError::FuneralNotFound);
        }
        Ok(())
    }

    // ---
    // Contactos
    // ---

    /// Regra de negócio: no máximo um contacto principal por funeral.
    /// Marcar um novo principal limpa os restantes, na mesma transação.
    pub async fn add_contact(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        payload: &CreateContactPayload,
    ) -> Result<FuneralContact, AppError> {
        // Garante que o funeral pertence a esta organização.
        self.get_funeral(organization_id, funeral_id).await?;

        let mut tx = self.pool.begin().await?;

        if payload.is_primary {
            self.funeral_repo.clear_primary_contacts(&mut *tx, funeral_id).await?;
        }

        let contact = self
            .funeral_repo
            .insert_contact(
                &mut *tx,
                funeral_id,
                payload.client_id,
                &payload.name,
                payload.relationship.as_deref(),
                payload.email.as_deref(),
                payload.phone.as_deref(),
                payload.is_primary,
            )
            .await?;

        tx.commit().await?;

        Ok(contact)
    }

    pub async fn list_contacts(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<Vec<FuneralContact>, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;
        self.funeral_repo.list_contacts(funeral_id).await
    }

    pub async fn delete_contact(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        contact_id: Uuid,
    ) -> Result<(), AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        let deleted = self.funeral_repo.delete_contact(funeral_id, contact_id).await?;
        if !deleted {
            return Err(AppError::ContactNotFound);
        }
        Ok(())
    }

    // ---
    // Custos
    // ---

    pub async fn add_cost(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        payload: &CreateCostPayload,
    ) -> Result<FuneralCost, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        self.funeral_repo
            .insert_cost(
                funeral_id,
                payload.supplier_id,
                &payload.description,
                payload.category.as_deref(),
                payload.quantity.unwrap_or(Decimal::ONE),
                payload.unit_price,
            )
            .await
    }

    pub async fn list_costs(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<Vec<FuneralCost>, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;
        self.funeral_repo.list_costs(funeral_id).await
    }

    pub async fn delete_cost(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        cost_id: Uuid,
    ) -> Result<(), AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        let deleted = self.funeral_repo.delete_cost(funeral_id, cost_id).await?;
        if !deleted {
            return Err(AppError::CostNotFound);
        }
        Ok(())
    }

    // ---
    // Documentos
    // ---

    pub async fn add_document(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        uploaded_by: Uuid,
        payload: &CreateDocumentPayload,
    ) -> Result<FuneralDocument, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        self.funeral_repo
            .insert_document(
                funeral_id,
                &payload.name,
                &payload.storage_path,
                payload.content_type.as_deref(),
                uploaded_by,
            )
            .await
    }

    pub async fn list_documents(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<Vec<FuneralDocument>, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;
        self.funeral_repo.list_documents(funeral_id).await
    }

    pub async fn delete_document(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        document_id: Uuid,
    ) -> Result<(), AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        let deleted = self.funeral_repo.delete_document(funeral_id, document_id).await?;
        if !deleted {
            return Err(AppError::DocumentNotFound);
        }
        Ok(())
    }

    // ---
    // Notas
    // ---

    pub async fn add_note(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        author_id: Uuid,
        payload: &CreateNotePayload,
    ) -> Result<FuneralNote, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;
        self.funeral_repo.insert_note(funeral_id, author_id, &payload.content).await
    }

    pub async fn list_notes(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<Vec<FuneralNote>, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;
        self.funeral_repo.list_notes(funeral_id).await
    }

    pub async fn delete_note(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        note_id: Uuid,
    ) -> Result<(), AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        let deleted = self.funeral_repo.delete_note(funeral_id, note_id).await?;
        if !deleted {
            return Err(AppError::NoteNotFound);
        }
        Ok(())
    }

    // ---
    // Desejos (checklist de cenário)
    // ---

    pub async fn add_wish(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        payload: &CreateWishPayload,
    ) -> Result<FuneralWish, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        self.funeral_repo
            .insert_wish(
                funeral_id,
                &payload.section,
                &payload.item_type,
                &payload.description,
                payload.value.as_deref(),
                payload.position,
            )
            .await
    }

    pub async fn list_wishes(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
    ) -> Result<Vec<FuneralWish>, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;
        self.funeral_repo.list_wishes(funeral_id).await
    }

    pub async fn update_wish(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        wish_id: Uuid,
        payload: &UpdateWishPayload,
    ) -> Result<FuneralWish, AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        self.funeral_repo
            .update_wish(
                funeral_id,
                wish_id,
                payload.value.as_deref(),
                payload.is_completed,
                payload.position,
            )
            .await?
            .ok_or(AppError::WishNotFound)
    }

    pub async fn delete_wish(
        &self,
        organization_id: Uuid,
        funeral_id: Uuid,
        wish_id: Uuid,
    ) -> Result<(), AppError> {
        self.get_funeral(organization_id, funeral_id).await?;

        let deleted = self.funeral_repo.delete_wish(funeral_id, wish_id).await?;
        if !deleted {
            return Err(AppError::WishNotFound);
        }
        Ok(())
    }
}
