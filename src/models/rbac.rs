// src/models/rbac.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// O que sai do banco (Tabela permission_definitions)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDefinition {
    pub id: Uuid,

    #[schema(example = "funerals:manage")]
    pub slug: String,

    #[schema(example = "Criar e editar registos de funerais")]
    pub description: String,

    #[schema(example = "FUNERALS")]
    pub module: String,
}

// Sobreposição por utilizador: concessão ou revogação, com validade opcional
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPermission {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub user_id: Uuid,
    pub permission_id: Uuid,
    pub granted: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// Linha achatada usada no cálculo das permissões efetivas
#[derive(Debug, Clone, FromRow)]
pub struct UserPermissionOverride {
    pub slug: String,
    pub granted: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

// O Payload para criar/atualizar uma sobreposição
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserPermissionPayload {
    pub user_id: Uuid,

    #[schema(example = "finance:view")]
    pub permission_slug: String,

    pub granted: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

// Resposta: slugs efetivos do membro que chama
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePermissionsResponse {
    pub role: crate::models::membership::MemberRole,
    pub permissions: Vec<String>,
}
