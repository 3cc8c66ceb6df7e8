// src/handlers/members.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        org::OrgContext,
        rbac::{CanManageUsers, RequireCapability},
    },
    models::membership::{MemberWithEmail, OrganizationMember, UpdateMemberPayload},
};

// GET /api/organizations/members
#[utoipa::path(
    get,
    path = "/api/organizations/members",
    tag = "Members",
    responses(
        (status = 200, description = "Membros da organização", body = Vec<MemberWithEmail>),
        (status = 403, description = "Sem capacidade manage_users")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_members(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageUsers>,
) -> Result<impl IntoResponse, AppError> {
    let members = app_state.membership_service.list_members(org.0).await?;

    Ok((StatusCode::OK, Json(members)))
}

// PATCH /api/organizations/members/{user_id}
#[utoipa::path(
    patch,
    path = "/api/organizations/members/{user_id}",
    tag = "Members",
    request_body = UpdateMemberPayload,
    responses(
        (status = 200, description = "Membro atualizado", body = OrganizationMember),
        (status = 403, description = "Sem capacidade manage_users"),
        (status = 404, description = "Membro não encontrado")
    ),
    params(
        ("user_id" = Uuid, Path, description = "ID do utilizador alvo"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_member(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageUsers>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateMemberPayload>,
) -> Result<impl IntoResponse, AppError> {
    let member = app_state
        .membership_service
        .update_member(org.0, user_id, payload.role, payload.status, payload.flags)
        .await?;

    Ok((StatusCode::OK, Json(member)))
}
