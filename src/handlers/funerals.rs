// src/handlers/funerals.rs

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
        auth::AuthenticatedUser,
        org::OrgContext,
        rbac::{CanManageFunerals, CanViewFinancials, RequireCapability},
    },
    models::funeral::{
        CreateContactPayload, CreateCostPayload, CreateDocumentPayload, CreateFuneralPayload,
        CreateNotePayload, CreateWishPayload, Funeral, FuneralContact, FuneralCost,
        FuneralDocument, FuneralNote, FuneralWish, UpdateFuneralPayload, UpdateWishPayload,
    },
};

// =============================================================================
//  ÁREA 1: FUNERAIS
// =============================================================================

// POST /api/funerals
#[utoipa::path(
    post,
    path = "/api/funerals",
    tag = "Funerals",
    request_body = CreateFuneralPayload,
    responses(
        (status = 201, description = "Funeral criado", body = Funeral),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Sem capacidade manage_funerals")
    ),
    params(("x-organization-id" = Uuid, Header, description = "ID da organização")),
    security(("api_jwt" = []))
)]
pub async fn create_funeral(
    State(app_state): State<AppState>,
    org: OrgContext,
    user: AuthenticatedUser,
    _cap: RequireCapability<CanManageFunerals>,
    Json(payload): Json<CreateFuneralPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let funeral = app_state
        .funeral_service
        .create_funeral(org.0, user.0.id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(funeral)))
}

// GET /api/funerals
#[utoipa::path(
    get,
    path = "/api/funerals",
    tag = "Funerals",
    responses((status = 200, description = "Funerais da organização", body = Vec<Funeral>)),
    params(("x-organization-id" = Uuid, Header, description = "ID da organização")),
    security(("api_jwt" = []))
)]
pub async fn list_funerals(
    State(app_state): State<AppState>,
    org: OrgContext,
) -> Result<impl IntoResponse, AppError> {
    let funerals = app_state.funeral_service.list_funerals(org.0).await?;

    Ok((StatusCode::OK, Json(funerals)))
}

// GET /api/funerals/{id}
#[utoipa::path(
    get,
    path = "/api/funerals/{id}",
    tag = "Funerals",
    responses(
        (status = 200, description = "Detalhe do funeral", body = Funeral),
        (status = 404, description = "Funeral não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_funeral(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let funeral = app_state.funeral_service.get_funeral(org.0, id).await?;

    Ok((StatusCode::OK, Json(funeral)))
}

// PATCH /api/funerals/{id}
#[utoipa::path(
    patch,
    path = "/api/funerals/{id}",
    tag = "Funerals",
    request_body = UpdateFuneralPayload,
    responses(
        (status = 200, description = "Funeral atualizado", body = Funeral),
        (status = 404, description = "Funeral não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_funeral(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFuneralPayload>,
) -> Result<impl IntoResponse, AppError> {
    let funeral = app_state
        .funeral_service
        .update_funeral(org.0, id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(funeral)))
}

// DELETE /api/funerals/{id}
#[utoipa::path(
    delete,
    path = "/api/funerals/{id}",
    tag = "Funerals",
    responses(
        (status = 204, description = "Funeral removido"),
        (status = 404, description = "Funeral não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_funeral(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.funeral_service.delete_funeral(org.0, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 2: CONTACTOS
// =============================================================================

// POST /api/funerals/{id}/contacts
#[utoipa::path(
    post,
    path = "/api/funerals/{id}/contacts",
    tag = "Funerals",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Contacto criado", body = FuneralContact),
        (status = 404, description = "Funeral não encontrado")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_contact(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let contact = app_state.funeral_service.add_contact(org.0, id, &payload).await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

// GET /api/funerals/{id}/contacts
#[utoipa::path(
    get,
    path = "/api/funerals/{id}/contacts",
    tag = "Funerals",
    responses((status = 200, description = "Contactos do funeral", body = Vec<FuneralContact>)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_contacts(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = app_state.funeral_service.list_contacts(org.0, id).await?;

    Ok((StatusCode::OK, Json(contacts)))
}

// DELETE /api/funerals/{id}/contacts/{contact_id}
#[utoipa::path(
    delete,
    path = "/api/funerals/{id}/contacts/{contact_id}",
    tag = "Funerals",
    responses((status = 204, description = "Contacto removido")),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("contact_id" = Uuid, Path, description = "ID do contacto"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_contact(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path((id, contact_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .funeral_service
        .delete_contact(org.0, id, contact_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 3: CUSTOS
// =============================================================================

// POST /api/funerals/{id}/costs
#[utoipa::path(
    post,
    path = "/api/funerals/{id}/costs",
    tag = "Funerals",
    request_body = CreateCostPayload,
    responses((status = 201, description = "Custo lançado", body = FuneralCost)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_cost(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateCostPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let cost = app_state.funeral_service.add_cost(org.0, id, &payload).await?;

    Ok((StatusCode::CREATED, Json(cost)))
}

// GET /api/funerals/{id}/costs — leitura de valores exige view_financials.
#[utoipa::path(
    get,
    path = "/api/funerals/{id}/costs",
    tag = "Funerals",
    responses(
        (status = 200, description = "Custos do funeral", body = Vec<FuneralCost>),
        (status = 403, description = "Sem capacidade view_financials")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_costs(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanViewFinancials>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let costs = app_state.funeral_service.list_costs(org.0, id).await?;

    Ok((StatusCode::OK, Json(costs)))
}

// DELETE /api/funerals/{id}/costs/{cost_id}
#[utoipa::path(
    delete,
    path = "/api/funerals/{id}/costs/{cost_id}",
    tag = "Funerals",
    responses((status = 204, description = "Custo removido")),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("cost_id" = Uuid, Path, description = "ID do custo"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_cost(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path((id, cost_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state.funeral_service.delete_cost(org.0, id, cost_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 4: DOCUMENTOS
// =============================================================================

// POST /api/funerals/{id}/documents — só metadados; o ficheiro vive no storage.
#[utoipa::path(
    post,
    path = "/api/funerals/{id}/documents",
    tag = "Funerals",
    request_body = CreateDocumentPayload,
    responses((status = 201, description = "Documento registado", body = FuneralDocument)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_document(
    State(app_state): State<AppState>,
    org: OrgContext,
    user: AuthenticatedUser,
    _cap: RequireCapability<CanManageFunerals>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateDocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let document = app_state
        .funeral_service
        .add_document(org.0, id, user.0.id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(document)))
}

// GET /api/funerals/{id}/documents
#[utoipa::path(
    get,
    path = "/api/funerals/{id}/documents",
    tag = "Funerals",
    responses((status = 200, description = "Documentos do funeral", body = Vec<FuneralDocument>)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_documents(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let documents = app_state.funeral_service.list_documents(org.0, id).await?;

    Ok((StatusCode::OK, Json(documents)))
}

// DELETE /api/funerals/{id}/documents/{document_id}
#[utoipa::path(
    delete,
    path = "/api/funerals/{id}/documents/{document_id}",
    tag = "Funerals",
    responses((status = 204, description = "Documento removido")),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("document_id" = Uuid, Path, description = "ID do documento"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_document(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path((id, document_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .funeral_service
        .delete_document(org.0, id, document_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 5: NOTAS
// =============================================================================

// POST /api/funerals/{id}/notes
#[utoipa::path(
    post,
    path = "/api/funerals/{id}/notes",
    tag = "Funerals",
    request_body = CreateNotePayload,
    responses((status = 201, description = "Nota criada", body = FuneralNote)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_note(
    State(app_state): State<AppState>,
    org: OrgContext,
    user: AuthenticatedUser,
    _cap: RequireCapability<CanManageFunerals>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateNotePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let note = app_state
        .funeral_service
        .add_note(org.0, id, user.0.id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(note)))
}

// GET /api/funerals/{id}/notes
#[utoipa::path(
    get,
    path = "/api/funerals/{id}/notes",
    tag = "Funerals",
    responses((status = 200, description = "Notas do funeral", body = Vec<FuneralNote>)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_notes(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let notes = app_state.funeral_service.list_notes(org.0, id).await?;

    Ok((StatusCode::OK, Json(notes)))
}

// DELETE /api/funerals/{id}/notes/{note_id}
#[utoipa::path(
    delete,
    path = "/api/funerals/{id}/notes/{note_id}",
    tag = "Funerals",
    responses((status = 204, description = "Nota removida")),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("note_id" = Uuid, Path, description = "ID da nota"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_note(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path((id, note_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state.funeral_service.delete_note(org.0, id, note_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  ÁREA 6: DESEJOS (checklist de cenário)
// =============================================================================

// POST /api/funerals/{id}/wishes
#[utoipa::path(
    post,
    path = "/api/funerals/{id}/wishes",
    tag = "Funerals",
    request_body = CreateWishPayload,
    responses((status = 201, description = "Item de desejo criado", body = FuneralWish)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn add_wish(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateWishPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let wish = app_state.funeral_service.add_wish(org.0, id, &payload).await?;

    Ok((StatusCode::CREATED, Json(wish)))
}

// GET /api/funerals/{id}/wishes
#[utoipa::path(
    get,
    path = "/api/funerals/{id}/wishes",
    tag = "Funerals",
    responses((status = 200, description = "Checklist de desejos", body = Vec<FuneralWish>)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_wishes(
    State(app_state): State<AppState>,
    org: OrgContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let wishes = app_state.funeral_service.list_wishes(org.0, id).await?;

    Ok((StatusCode::OK, Json(wishes)))
}

// PATCH /api/funerals/{id}/wishes/{wish_id}
#[utoipa::path(
    patch,
    path = "/api/funerals/{id}/wishes/{wish_id}",
    tag = "Funerals",
    request_body = UpdateWishPayload,
    responses((status = 200, description = "Item atualizado", body = FuneralWish)),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("wish_id" = Uuid, Path, description = "ID do item"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_wish(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path((id, wish_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateWishPayload>,
) -> Result<impl IntoResponse, AppError> {
    let wish = app_state
        .funeral_service
        .update_wish(org.0, id, wish_id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(wish)))
}

// DELETE /api/funerals/{id}/wishes/{wish_id}
#[utoipa::path(
    delete,
    path = "/api/funerals/{id}/wishes/{wish_id}",
    tag = "Funerals",
    responses((status = 204, description = "Item removido")),
    params(
        ("id" = Uuid, Path, description = "ID do funeral"),
        ("wish_id" = Uuid, Path, description = "ID do item"),
        ("x-organization-id" = Uuid, Header, description = "ID da organização")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_wish(
    State(app_state): State<AppState>,
    org: OrgContext,
    _cap: RequireCapability<CanManageFunerals>,
    Path((id, wish_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state.funeral_service.delete_wish(org.0, id, wish_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
