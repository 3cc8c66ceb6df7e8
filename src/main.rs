// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::{auth::auth_guard, guard::route_guard, org::org_guard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de usuário (protegidas pelo middleware)
    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Onboarding: exige sessão, mas ainda não exige organização.
    let onboarding_routes = Router::new()
        .route("/onboarding", post(handlers::onboarding::submit_onboarding))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Convites: send/accept exigem sessão; validate é público
    // (a página de aceitação consulta antes do registo).
    let invite_routes = Router::new()
        .route("/send", post(handlers::invites::send_invite))
        .route("/accept", post(handlers::invites::accept_invite))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ))
        .route("/validate", get(handlers::invites::validate_invite));

    let funeral_routes = Router::new()
        .route("/", post(handlers::funerals::create_funeral)
               .get(handlers::funerals::list_funerals))
        .route("/{id}", get(handlers::funerals::get_funeral)
               .patch(handlers::funerals::update_funeral)
               .delete(handlers::funerals::delete_funeral))
        .route("/{id}/contacts", post(handlers::funerals::add_contact)
               .get(handlers::funerals::list_contacts))
        .route("/{id}/contacts/{contact_id}", axum::routing::delete(handlers::funerals::delete_contact))
        .route("/{id}/costs", post(handlers::funerals::add_cost)
               .get(handlers::funerals::list_costs))
        .route("/{id}/costs/{cost_id}", axum::routing::delete(handlers::funerals::delete_cost))
        .route("/{id}/documents", post(handlers::funerals::add_document)
               .get(handlers::funerals::list_documents))
        .route("/{id}/documents/{document_id}", axum::routing::delete(handlers::funerals::delete_document))
        .route("/{id}/notes", post(handlers::funerals::add_note)
               .get(handlers::funerals::list_notes))
        .route("/{id}/notes/{note_id}", axum::routing::delete(handlers::funerals::delete_note))
        .route("/{id}/wishes", post(handlers::funerals::add_wish)
               .get(handlers::funerals::list_wishes))
        .route("/{id}/wishes/{wish_id}", axum::routing::patch(handlers::funerals::update_wish)
               .delete(handlers::funerals::delete_wish))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            org_guard,
        ));

    let client_routes = Router::new()
        .route("/", post(handlers::clients::create_client)
               .get(handlers::clients::list_clients))
        .route("/{id}", get(handlers::clients::get_client)
               .patch(handlers::clients::update_client)
               .delete(handlers::clients::delete_client))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            org_guard,
        ));

    let supplier_routes = Router::new()
        .route("/", post(handlers::suppliers::create_supplier)
               .get(handlers::suppliers::list_suppliers))
        .route("/{id}", axum::routing::patch(handlers::suppliers::update_supplier)
               .delete(handlers::suppliers::delete_supplier))
        .route("/{id}/pricelist", post(handlers::suppliers::add_pricelist_item)
               .get(handlers::suppliers::list_pricelist))
        .route("/{id}/pricelist/{item_id}", axum::routing::delete(handlers::suppliers::delete_pricelist_item))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            org_guard,
        ));

    let organization_routes = Router::new()
        .route("/current", get(handlers::organizations::get_current_organization))
        .route("/settings", axum::routing::patch(handlers::organizations::update_organization_settings))
        .route("/members", get(handlers::members::list_members))
        .route("/members/{user_id}", axum::routing::patch(handlers::members::update_member))
        .route("/permissions/effective", get(handlers::rbac::effective_permissions))
        .route("/permissions/overrides", put(handlers::rbac::upsert_permission_override))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            org_guard,
        ));

    // Rotas de página por trás do route guard (o matcher exclui
    // /api/*, /_next/static/*, /_next/image/* e /favicon.ico).
    let page_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/auth/signin", get(handlers::pages::signin_page))
        .route("/onboarding", get(handlers::pages::onboarding_page))
        .route("/dashboard", get(handlers::pages::dashboard_page))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            route_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/permissions", get(handlers::rbac::list_permissions))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api", onboarding_routes)
        .nest("/api/invites", invite_routes)
        .nest("/api/funerals", funeral_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/suppliers", supplier_routes)
        .nest("/api/organizations", organization_routes)
        .merge(page_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
