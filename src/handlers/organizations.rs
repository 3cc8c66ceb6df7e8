// src/handlers/organizations.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        org::OrgContext,
        rbac::{CanManageSettings, RequireCapability},
    },
    models::organization::{Organization, UpdateOrganizationPayload},
};

// GET /api/organizations/current — o registo do tenant do contexto.
#[utoipa::path(
    get,
    path = "/api/organizations/current",
    tag = "Organizations",
    responses(
        (status = 200, description = "Organização do contexto", body = Organization),
        (status = 403, description = "Sem adesão ativa")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_current_organization(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let organization = app_state
        .org_repo
        .find_organization(org.0)
        .await?
        .ok_or(AppError::OrganizationNotFound)?;

    Ok((StatusCode::OK, Json(organization)))
}

// PATCH /api/organizations/settings — só o owner tem manage_settings
// nos defaults de cargo.
#[utoipa::path(
    patch,
    path = "/api/organizations/settings",
    tag = "Organizations",
    request_body = UpdateOrganizationPayload,
    responses(
        (status = 200, description = "Organização atualizada", body = Organization),
        (status = 403, description = "Sem capacidade manage_settings"),
        (status = 409, description = "Nome de organização já em uso")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_organization_settings(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageSettings>,
    Json(payload): Json<UpdateOrganizationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let organization = app_state
        .org_repo
        .update_organization(org.0, &payload)
        .await?
        .ok_or(AppError::OrganizationNotFound)?;

    Ok((StatusCode::OK, Json(organization)))
}
