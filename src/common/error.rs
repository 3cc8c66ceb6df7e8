// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda resposta não-2xx sai como JSON `{ "error": ... }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso negado: {0}")]
    Forbidden(String),

    #[error("Organização não encontrada")]
    OrganizationNotFound,

    #[error("Já existe uma organização com este nome")]
    OrganizationNameTaken,

    #[error("Funeral não encontrado")]
    FuneralNotFound,

    #[error("Contacto não encontrado")]
    ContactNotFound,

    #[error("Custo não encontrado")]
    CostNotFound,

    #[error("Documento não encontrado")]
    DocumentNotFound,

    #[error("Nota não encontrada")]
    NoteNotFound,

    #[error("Item de desejos não encontrado")]
    WishNotFound,

    #[error("Cliente não encontrado")]
    ClientNotFound,

    #[error("Fornecedor não encontrado")]
    SupplierNotFound,

    #[error("Membro não encontrado")]
    MemberNotFound,

    #[error("Convite inválido ou expirado")]
    InviteNotFound,

    #[error("Permissão não encontrada: {0}")]
    PermissionNotFound(String),

    #[error("Este utilizador já é membro da organização")]
    MemberAlreadyExists,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::MemberAlreadyExists => (
                StatusCode::CONFLICT,
                "Este utilizador já é membro da organização.".to_string(),
            ),
            AppError::OrganizationNameTaken => (
                StatusCode::CONFLICT,
                "Já existe uma organização com este nome.".to_string(),
            ),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::OrganizationNotFound => {
                (StatusCode::NOT_FOUND, "Organização não encontrada.".to_string())
            }
            AppError::FuneralNotFound => {
                (StatusCode::NOT_FOUND, "Funeral não encontrado.".to_string())
            }
            AppError::ContactNotFound => {
                (StatusCode::NOT_FOUND, "Contacto não encontrado.".to_string())
            }
            AppError::CostNotFound => {
                (StatusCode::NOT_FOUND, "Custo não encontrado.".to_string())
            }
            AppError::DocumentNotFound => {
                (StatusCode::NOT_FOUND, "Documento não encontrado.".to_string())
            }
            AppError::NoteNotFound => {
                (StatusCode::NOT_FOUND, "Nota não encontrada.".to_string())
            }
            AppError::WishNotFound => {
                (StatusCode::NOT_FOUND, "Item de desejos não encontrado.".to_string())
            }
            AppError::ClientNotFound => {
                (StatusCode::NOT_FOUND, "Cliente não encontrado.".to_string())
            }
            AppError::SupplierNotFound => {
                (StatusCode::NOT_FOUND, "Fornecedor não encontrado.".to_string())
            }
            AppError::MemberNotFound => {
                (StatusCode::NOT_FOUND, "Membro não encontrado.".to_string())
            }
            AppError::InviteNotFound => {
                (StatusCode::NOT_FOUND, "Convite inválido ou expirado.".to_string())
            }
            AppError::PermissionNotFound(slug) => (
                StatusCode::NOT_FOUND,
                format!("Permissão '{slug}' não encontrada."),
            ),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` loga a mensagem detalhada; o chamador só vê o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_403() {
        let resp = AppError::Forbidden("sem permissão".into()).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn not_found_variants_map_to_404() {
        let resp = AppError::OrganizationNotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::InviteNotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // Entidades filhas de um funeral têm variantes próprias.
        let resp = AppError::ContactNotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = AppError::WishNotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_member_maps_to_409() {
        let resp = AppError::MemberAlreadyExists.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn duplicate_organization_name_maps_to_409() {
        let resp = AppError::OrganizationNameTaken.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
