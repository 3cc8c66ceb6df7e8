// src/middleware/org.rs

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    common::error::AppError, config::AppState, middleware::auth::authenticate,
    models::membership::OrganizationMember,
};

// O nome do nosso cabeçalho HTTP customizado
const ORGANIZATION_ID_HEADER: &str = "x-organization-id";

// Identifica a organização que o utilizador quer aceder.
#[derive(Debug, Clone, Copy)]
pub struct OrgContext(pub Uuid);

/// Guard combinado: autentica o Bearer token, lê o cabeçalho
/// X-Organization-Id e verifica que o utilizador é membro ATIVO dessa
/// organização. Injeta utilizador, contexto e linha de membro.
pub async fn org_guard(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate(&app_state, request.headers()).await?;

    let header_value = request
        .headers()
        .get(ORGANIZATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::Forbidden("O cabeçalho X-Organization-Id é obrigatório.".to_string())
        })?;

    let organization_id = Uuid::parse_str(header_value).map_err(|_| {
        AppError::Forbidden("Cabeçalho X-Organization-Id inválido (não é um UUID).".to_string())
    })?;

    // A verificação de autorização mais importante do sistema:
    // sem adesão ativa não há acesso a nada dentro do tenant.
    let member = app_state
        .membership_repo
        .find_member(&app_state.db_pool, organization_id, user.id)
        .await?
        .filter(|m| m.is_active())
        .ok_or_else(|| {
            AppError::Forbidden("Você não é membro ativo desta organização.".to_string())
        })?;

    request.extensions_mut().insert(user);
    request.extensions_mut().insert(OrgContext(organization_id));
    request.extensions_mut().insert(member);

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for OrgContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<OrgContext>()
            .copied()
            .ok_or_else(|| {
                AppError::Forbidden("Contexto da organização não encontrado.".to_string())
            })
    }
}

// Extrator da linha de membro injetada pelo org_guard
pub struct CurrentMember(pub OrganizationMember);

impl<S> FromRequestParts<S> for CurrentMember
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<OrganizationMember>()
            .cloned()
            .map(CurrentMember)
            .ok_or_else(|| {
                AppError::Forbidden("Contexto da organização não encontrado.".to_string())
            })
    }
}
