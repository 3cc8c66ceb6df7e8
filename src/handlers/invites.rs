// src/handlers/invites.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::invite::{AcceptInvitePayload, SendInvitePayload, SendInviteResponse, ValidateInviteResponse},
    models::membership::OrganizationMember,
};

// POST /api/invites/send
#[utoipa::path(
    post,
    path = "/api/invites/send",
    tag = "Invites",
    request_body = SendInvitePayload,
    responses(
        (status = 200, description = "Convite resolvido", body = SendInviteResponse),
        (status = 403, description = "Requisitante sem cargo owner/admin"),
        (status = 409, description = "Já é membro da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn send_invite(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<SendInvitePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let response = app_state
        .invite_service
        .send_invite(user.0.id, payload.organization_id, &payload.email, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

// POST /api/invites/accept — entrada separada: o convidado, já com conta
// e sessão, entrega o token do convite.
#[utoipa::path(
    post,
    path = "/api/invites/accept",
    tag = "Invites",
    request_body = AcceptInvitePayload,
    responses(
        (status = 201, description = "Adesão criada", body = OrganizationMember),
        (status = 404, description = "Convite inválido ou expirado"),
        (status = 409, description = "Já é membro da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn accept_invite(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<AcceptInvitePayload>,
) -> Result<impl IntoResponse, AppError> {
    let member = app_state
        .invite_service
        .accept_invite(user.0.id, payload.token)
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ValidateInviteQuery {
    pub organization_id: Uuid,
}

// GET /api/invites/validate — sem sessão: a página de aceitação usa isto
// para mostrar o nome da organização antes do registo.
#[utoipa::path(
    get,
    path = "/api/invites/validate",
    tag = "Invites",
    params(ValidateInviteQuery),
    responses(
        (status = 200, description = "Organização válida", body = ValidateInviteResponse),
        (status = 404, description = "Organização não encontrada")
    )
)]
pub async fn validate_invite(
    State(app_state): State<AppState>,
    Query(query): Query<ValidateInviteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let response = app_state
        .invite_service
        .validate_organization(query.organization_id)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}
