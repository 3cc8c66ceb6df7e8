// src/handlers/rbac.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        org::{CurrentMember, OrgContext},
        rbac::{CanManageUsers, RequireCapability},
    },
    models::rbac::{
        EffectivePermissionsResponse, PermissionDefinition, UpsertUserPermissionPayload,
        UserPermission,
    },
};

// GET /api/permissions — o catálogo completo de permissões do sistema.
#[utoipa::path(
    get,
    path = "/api/permissions",
    tag = "RBAC",
    responses(
        (status = 200, description = "Catálogo de permissões", body = Vec<PermissionDefinition>)
    )
)]
pub async fn list_permissions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let definitions = app_state.rbac_service.list_definitions().await?;

    Ok((StatusCode::OK, Json(definitions)))
}

// GET /api/organizations/permissions/effective — defaults do cargo,
// mais concessões, menos revogações (sobreposições expiradas ignoradas).
#[utoipa::path(
    get,
    path = "/api/organizations/permissions/effective",
    tag = "RBAC",
    responses(
        (status = 200, description = "Permissões efetivas do membro", body = EffectivePermissionsResponse)
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn effective_permissions(
    State(app_state): State<AppState>,
    org: OrgContext,
    CurrentMember(member): CurrentMember,
) -> Result<impl IntoResponse, AppError> {
    let permissions = app_state
        .rbac_service
        .effective_permissions(org.0, member.user_id, member.role)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EffectivePermissionsResponse { role: member.role, permissions }),
    ))
}

// PUT /api/organizations/permissions/overrides
#[utoipa::path(
    put,
    path = "/api/organizations/permissions/overrides",
    tag = "RBAC",
    request_body = UpsertUserPermissionPayload,
    responses(
        (status = 200, description = "Sobreposição gravada", body = UserPermission),
        (status = 403, description = "Sem capacidade manage_users"),
        (status = 404, description = "Permissão não encontrada")
    ),
    params(
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn upsert_permission_override(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageUsers>,
    Json(payload): Json<UpsertUserPermissionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = app_state
        .rbac_service
        .upsert_override(
            &app_state.db_pool,
            org.0,
            payload.user_id,
            &payload.permission_slug,
            payload.granted,
            payload.expires_at,
        )
        .await?;

    Ok((StatusCode::OK, Json(row)))
}
