// src/services/client_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ClientRepository,
    models::client::{Client, CreateClientPayload, UpdateClientPayload},
};

#[derive(Clone)]
pub struct ClientService {
    client_repo: ClientRepository,
}

impl ClientService {
    pub fn new(client_repo: ClientRepository) -> Self {
        Self { client_repo }
    }

    pub async fn create_client(
        &self,
        organization_id: Uuid,
        payload: &CreateClientPayload,
    ) -> Result<Client, AppError> {
        self.client_repo.create_client(organization_id, payload).await
    }

    pub async fn list_clients(&self, organization_id: Uuid) -> Result<Vec<Client>, AppError> {
        self.client_repo.list_clients(organization_id).await
    }

    pub async fn get_client(
        &self,
        organization_id: Uuid,
        client_id: Uuid,
    ) -> Result<Client, AppError> {
        self.client_repo
            .find_client(organization_id, client_id)
            .await?
            .ok_or(AppError::ClientNotFound)
    }

    pub async fn update_client(
        &self,
        organization_id: Uuid,
        client_id: Uuid,
        payload: &UpdateClientPayload,
    ) -> Result<Client, AppError> {
        self.client_repo
            .update_client(organization_id, client_id, payload)
            .await?
            .ok_or(AppError::ClientNotFound)
    }

    pub async fn delete_client(
        &self,
        organization_id: Uuid,
        client_id: Uuid,
    ) -> Result<(), AppError> {
        let deleted = self.client_repo.delete_client(organization_id, client_id).await?;
        if !deleted {
            return Err(AppError::ClientNotFound);
        }
        Ok(())
    }
}
