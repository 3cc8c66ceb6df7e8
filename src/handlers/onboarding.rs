// src/handlers/onboarding.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::organization::{OnboardingPayload, OnboardingResponse},
};

// POST /api/onboarding
//
// Provisiona (ou reprovisiona) o triplo Perfil/Organização/Membro para o
// utilizador autenticado. Submeter duas vezes é seguro: atualiza em vez
// de duplicar.
#[utoipa::path(
    post,
    path = "/api/onboarding",
    tag = "Onboarding",
    request_body = OnboardingPayload,
    responses(
        (status = 200, description = "Onboarding provisionado", body = OnboardingResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Não autenticado"),
        (status = 409, description = "Nome de organização já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn submit_onboarding(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<OnboardingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let result = app_state
        .onboarding_service
        .provision(user.0.id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
