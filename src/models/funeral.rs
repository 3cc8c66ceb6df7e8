// src/models/funeral.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Mapeia o CREATE TYPE funeral_status do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "funeral_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FuneralStatus {
    Planning,
    Scheduled,
    Completed,
}

// O registo raiz: um funeral com os dados do falecido embutidos
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Funeral {
    pub id: Uuid,
    pub organization_id: Uuid,

    pub deceased_first_name: String,
    pub deceased_last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub place_of_death: Option<String>,

    pub status: FuneralStatus,
    pub funeral_date: Option<DateTime<Utc>>,
    pub location: Option<String>,

    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuneralPayload {
    #[validate(length(min = 1, message = "O primeiro nome do falecido é obrigatório."))]
    pub deceased_first_name: String,

    #[validate(length(min = 1, message = "O apelido do falecido é obrigatório."))]
    pub deceased_last_name: String,

    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub place_of_death: Option<String>,
    pub funeral_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFuneralPayload {
    pub deceased_first_name: Option<String>,
    pub deceased_last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub place_of_death: Option<String>,
    pub status: Option<FuneralStatus>,
    pub funeral_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

// --- CONTACTOS ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuneralContact {
    pub id: Uuid,
    pub funeral_id: Uuid,
    pub client_id: Option<Uuid>,
    pub name: String,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    pub client_id: Option<Uuid>,

    #[validate(length(min = 1, message = "O nome do contacto é obrigatório."))]
    pub name: String,

    #[schema(example = "filho")]
    pub relationship: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
    pub phone: Option<String>,

    #[serde(default)]
    pub is_primary: bool,
}

// --- CUSTOS ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuneralCost {
    pub id: Uuid,
    pub funeral_id: Uuid,
    pub supplier_id: Option<Uuid>,
    pub description: String,
    pub category: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCostPayload {
    pub supplier_id: Option<Uuid>,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    #[schema(example = "transporte")]
    pub category: Option<String>,

    pub quantity: Option<Decimal>,
    pub unit_price: Decimal,
}

// --- DOCUMENTOS ---

// Apenas metadados; o ficheiro em si vive no serviço de storage.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuneralDocument {
    pub id: Uuid,
    pub funeral_id: Uuid,
    pub name: String,
    pub storage_path: String,
    pub content_type: Option<String>,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentPayload {
    #[validate(length(min = 1, message = "O nome do documento é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O caminho de storage é obrigatório."))]
    pub storage_path: String,

    #[schema(example = "application/pdf")]
    pub content_type: Option<String>,
}

// --- NOTAS ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuneralNote {
    pub id: Uuid,
    pub funeral_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotePayload {
    #[validate(length(min = 1, message = "O conteúdo da nota é obrigatório."))]
    pub content: String,
}

// --- DESEJOS (checklist de cenário) ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuneralWish {
    pub id: Uuid,
    pub funeral_id: Uuid,

    #[schema(example = "cerimonia")]
    pub section: String,

    #[schema(example = "musica")]
    pub item_type: String,

    pub description: String,
    pub value: Option<String>,
    pub is_completed: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishPayload {
    #[validate(length(min = 1, message = "A secção é obrigatória."))]
    pub section: String,

    #[validate(length(min = 1, message = "O tipo de item é obrigatório."))]
    pub item_type: String,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    pub value: Option<String>,

    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWishPayload {
    pub value: Option<String>,
    pub is_completed: Option<bool>,
    pub position: Option<i32>,
}
