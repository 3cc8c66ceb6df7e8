// src/models/invite.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::membership::MemberRole;

// O que sai do banco (Tabela organization_invites)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInvite {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub email: String,
    pub role: MemberRole,
    pub token: Uuid,
    pub invited_by: Uuid,
    pub accepted_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OrganizationInvite {
    pub fn is_pending(&self, now: DateTime<Utc>) -> bool {
        self.accepted_at.is_none() && self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn invite(accepted_at: Option<DateTime<Utc>>, expires_at: DateTime<Utc>) -> OrganizationInvite {
        OrganizationInvite {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            email: "colega@funeraria.example".to_string(),
            role: MemberRole::Editor,
            token: Uuid::new_v4(),
            invited_by: Uuid::new_v4(),
            accepted_at,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn invite_within_validity_is_pending() {
        let now = Utc::now();
        assert!(invite(None, now + Duration::days(1)).is_pending(now));
    }

    #[test]
    fn accepted_or_expired_invite_is_not_pending() {
        let now = Utc::now();
        assert!(!invite(Some(now), now + Duration::days(1)).is_pending(now));
        assert!(!invite(None, now - Duration::hours(1)).is_pending(now));
    }
}

// O Payload para convidar um e-mail para a organização
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendInvitePayload {
    pub organization_id: Uuid,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "colega@funeraria.example")]
    pub email: String,

    pub role: MemberRole,
}

// Como o convite foi resolvido: membro imediato ou convite por e-mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InviteOutcome {
    ExistingUser,
    NewUser,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendInviteResponse {
    #[serde(rename = "type")]
    pub outcome: InviteOutcome,
    pub organization_id: Uuid,
    pub email: String,
}

// O Payload de aceitação: o utilizador autenticado entrega o token
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitePayload {
    pub token: Uuid,
}

// Resposta do GET /api/invites/validate
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateInviteResponse {
    pub organization_id: Uuid,
    pub organization_name: String,
}
