// src/handlers/suppliers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        org::OrgContext,
        rbac::{CanManageSuppliers, RequireCapability},
    },
    models::supplier::{
        CreatePricelistItemPayload, CreateSupplierPayload, PricelistItem, Supplier,
        UpdateSupplierPayload,
    },
};

// POST /api/suppliers
#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "Suppliers",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = Supplier),
        (status = 403, description = "Sem capacidade manage_suppliers")
    ),
    params(("x-organization-id" = Uuid, Header, description = "ID da organização")),
    security(("api_jwt" = []))
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageSuppliers>,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state
        .supplier_service
        .create_supplier(org.0, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

// GET /api/suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Suppliers",
    responses((status = 200, description = "Fornecedores da organização", body = Vec<Supplier>)),
    params(("x-organization-id" = Uuid, Header, description = "ID da organização")),
    security(("api_jwt" = []))
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.supplier_service.list_suppliers(org.0).await?;

    Ok((StatusCode::OK, Json(suppliers)))
}

// PATCH /api/suppliers/{id}
#[utoipa::path(
    patch,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    request_body = UpdateSupplierPayload,
    responses(
        (status = 200, description = "Fornecedor atualizado", body = Supplier),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do fornecedor"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_supplier(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageSuppliers>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    let supplier = app_state
        .supplier_service
        .update_supplier(org.0, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(supplier)))
}

// DELETE /api/suppliers/{id}
#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = "Suppliers",
    responses(
        (status = 204, description = "Fornecedor removido"),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do fornecedor"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_supplier(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageSuppliers>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.supplier_service.delete_supplier(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  TABELA DE PREÇOS
// =============================================================================

// POST /api/suppliers/{id}/pricelist
#[utoipa::path(
    post,
    path = "/api/suppliers/{id}/pricelist",
    tag = "Suppliers",
    request_body = CreatePricelistItemPayload,
    responses(
        (status = 201, description = "Item de preço criado", body = PricelistItem),
        (status = 404, description = "Fornecedor não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do fornecedor"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_pricelist_item(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageSuppliers>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreatePricelistItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .supplier_service
        .add_pricelist_item(org.0, id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// GET /api/suppliers/{id}/pricelist
#[utoipa::path(
    get,
    path = "/api/suppliers/{id}/pricelist",
    tag = "Suppliers",
    responses((status = 200, description = "Tabela de preços", body = Vec<PricelistItem>)),
    params(
        ("id" = Uuid, Path, description = "ID do fornecedor"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_pricelist(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state.supplier_service.list_pricelist(org.0, id).await?;

    Ok((StatusCode::OK, Json(items)))
}

// DELETE /api/suppliers/{id}/pricelist/{item_id}
#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}/pricelist/{item_id}",
    tag = "Suppliers",
    responses((status = 204, description = "Item removido")),
    params(
        ("id" = Uuid, Path, description = "ID do fornecedor"),
        ("item_id" = Uuid, Path, description = "ID do item"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_pricelist_item(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageSuppliers>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .supplier_service
        .delete_pricelist_item(org.0, id, item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
