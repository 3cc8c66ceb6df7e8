// src/models/organization.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// O que sai do banco (Tabela organizations)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,

    #[schema(example = "Funerária Santa Clara")]
    pub name: String,

    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,

    // Metadados de plano/faturação
    #[schema(example = "trial")]
    pub plan: String,
    pub billing_email: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// O que sai do banco (Tabela profiles) — um por utilizador autenticado
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: Uuid,
    pub organization_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Atualização parcial das configurações da organização
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationPayload {
    #[validate(length(min = 1, message = "O nome da organização não pode ser vazio."))]
    pub name: Option<String>,

    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    #[validate(email(message = "O e-mail de faturação é inválido."))]
    pub billing_email: Option<String>,
}

// O "formulário" do onboarding: dados da empresa + dados do dono
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingPayload {
    #[validate(length(min = 1, message = "O nome da empresa é obrigatório."))]
    #[schema(example = "Funerária Santa Clara")]
    pub company_name: String,

    pub company_address: Option<String>,
    pub company_postal_code: Option<String>,
    pub company_city: Option<String>,
    pub company_phone: Option<String>,

    #[validate(email(message = "O e-mail da empresa é inválido."))]
    pub company_email: Option<String>,

    #[validate(length(min = 1, message = "O primeiro nome é obrigatório."))]
    pub first_name: String,

    #[validate(length(min = 1, message = "O apelido é obrigatório."))]
    pub last_name: String,

    pub phone: Option<String>,
}

// Resposta do onboarding: o triplo provisionado
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub profile: Profile,
    pub organization: Organization,
}
