// src/middleware/guard.rs
//
// Guard de rotas de página: corre antes de cada pedido não-API, renova a
// sessão e decide entre deixar passar, mandar para o sign-in ou para o
// onboarding/dashboard. Nunca bloqueia por falha transitória de leitura —
// só por ausência definitiva de sessão.

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header::SET_COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::config::AppState;

pub const SESSION_COOKIE: &str = "session";

// O matcher original: tudo exceto API, assets estáticos e favicon.
const EXEMPT_PREFIXES: &[&str] = &["/api/", "/_next/static/", "/_next/image/"];

pub fn is_exempt(path: &str) -> bool {
    path == "/favicon.ico" || EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
}

// Só o segmento /auth em si e os seus filhos; /authors não conta.
fn is_auth_path(path: &str) -> bool {
    path == "/auth" || path.starts_with("/auth/")
}

/// O resultado da árvore de decisão, antes de qualquer consulta ao banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Deixa o pedido passar.
    Allow,
    /// Sem sessão num caminho protegido.
    RedirectSignin,
    /// Sessão válida em `/` ou `/auth/*`: falta consultar o estado do
    /// onboarding para saber o destino.
    CheckOnboarding,
}

/// Árvore de decisão avaliada uma vez por pedido. Pura de propósito:
/// o I/O (cookie, banco) fica todo no middleware.
pub fn decide(path: &str, authenticated: bool) -> GuardDecision {
    if !authenticated {
        if path == "/" || is_auth_path(path) {
            return GuardDecision::Allow;
        }
        return GuardDecision::RedirectSignin;
    }

    // O onboarding em si é sempre acessível a quem tem sessão.
    if path == "/onboarding" {
        return GuardDecision::Allow;
    }

    if path == "/" || is_auth_path(path) {
        return GuardDecision::CheckOnboarding;
    }

    // Restantes caminhos protegidos: o guard do lado do cliente trata do
    // resto do enforcement de onboarding.
    GuardDecision::Allow
}

/// Destino depois da consulta ao estado do onboarding.
/// `None` (perfil inexistente) conta como "precisa de onboarding".
pub fn onboarding_destination(completed: Option<bool>) -> &'static str {
    if completed.unwrap_or(false) {
        "/dashboard"
    } else {
        "/onboarding"
    }
}

pub async fn route_guard(
    State(app_state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if is_exempt(&path) {
        return next.run(request).await;
    }

    // 1. Sessão: lê o cookie e valida o JWT. Token inválido/expirado = sem
    // utilizador. Se ainda é válido mas está perto de expirar, renova.
    let mut refreshed_token: Option<String> = None;
    let user_id = jar.get(SESSION_COOKIE).and_then(|cookie| {
        let claims = app_state.auth_service.decode_token(cookie.value()).ok()?;
        refreshed_token = app_state
            .auth_service
            .refresh_token(&claims)
            .ok()
            .flatten();
        Some(claims.sub)
    });

    // 2. Decide.
    let response = match decide(&path, user_id.is_some()) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectSignin => Redirect::temporary("/auth/signin").into_response(),
        GuardDecision::CheckOnboarding => {
            let Some(user_id) = user_id else {
                return Redirect::temporary("/auth/signin").into_response();
            };

            match app_state.org_repo.onboarding_completed(user_id).await {
                Ok(completed) => {
                    Redirect::temporary(onboarding_destination(completed)).into_response()
                }
                // 3. Falha na leitura: deixa passar em vez de bloquear.
                Err(e) => {
                    let correlation_id = Uuid::new_v4();
                    tracing::error!(
                        %correlation_id,
                        user_id = %user_id,
                        path = %path,
                        error = %e,
                        "Guard: falha ao consultar estado do onboarding; pedido autorizado (fail-open)"
                    );
                    next.run(request).await
                }
            }
        }
    };

    attach_refreshed_session(response, refreshed_token)
}

fn attach_refreshed_session(mut response: Response, token: Option<String>) -> Response {
    if let Some(token) = token {
        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        if let Ok(value) = HeaderValue::try_from(cookie.to_string()) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_on_protected_path_redirects_to_signin() {
        assert_eq!(decide("/dashboard", false), GuardDecision::RedirectSignin);
        assert_eq!(decide("/funerals/abc", false), GuardDecision::RedirectSignin);
        assert_eq!(decide("/onboarding", false), GuardDecision::RedirectSignin);
    }

    #[test]
    fn anonymous_on_root_and_auth_paths_is_allowed() {
        assert_eq!(decide("/", false), GuardDecision::Allow);
        assert_eq!(decide("/auth", false), GuardDecision::Allow);
        assert_eq!(decide("/auth/signin", false), GuardDecision::Allow);
        assert_eq!(decide("/auth/callback", false), GuardDecision::Allow);
    }

    #[test]
    fn auth_prefix_does_not_capture_sibling_segments() {
        // /authors é um caminho protegido qualquer, não uma rota de auth.
        assert_eq!(decide("/authors", false), GuardDecision::RedirectSignin);
        assert_eq!(decide("/authors", true), GuardDecision::Allow);
    }

    #[test]
    fn authenticated_on_onboarding_always_passes() {
        assert_eq!(decide("/onboarding", true), GuardDecision::Allow);
    }

    #[test]
    fn authenticated_on_root_or_auth_checks_onboarding() {
        assert_eq!(decide("/", true), GuardDecision::CheckOnboarding);
        assert_eq!(decide("/auth/signin", true), GuardDecision::CheckOnboarding);
    }

    #[test]
    fn authenticated_on_other_paths_passes_through() {
        assert_eq!(decide("/dashboard", true), GuardDecision::Allow);
        assert_eq!(decide("/funerals", true), GuardDecision::Allow);
    }

    #[test]
    fn missing_profile_counts_as_needs_onboarding() {
        assert_eq!(onboarding_destination(None), "/onboarding");
        assert_eq!(onboarding_destination(Some(false)), "/onboarding");
        assert_eq!(onboarding_destination(Some(true)), "/dashboard");
    }

    #[test]
    fn matcher_skips_api_assets_and_favicon() {
        assert!(is_exempt("/api/onboarding"));
        assert!(is_exempt("/_next/static/chunk.js"));
        assert!(is_exempt("/_next/image/logo.png"));
        assert!(is_exempt("/favicon.ico"));
        assert!(!is_exempt("/dashboard"));
        assert!(!is_exempt("/"));
    }
}
