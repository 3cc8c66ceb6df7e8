// src/handlers/pages.rs
//
// Rotas de página mínimas servidas por trás do route guard. Em produção o
// frontend é um colaborador externo; estas respostas existem para que o
// guard tenha destino real para permitir/redirecionar.

use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html("<h1>Amparo</h1><p>CRM para agências funerárias.</p>")
}

pub async fn signin_page() -> Html<&'static str> {
    Html("<h1>Entrar</h1>")
}

pub async fn onboarding_page() -> Html<&'static str> {
    Html("<h1>Onboarding</h1>")
}

pub async fn dashboard_page() -> Html<&'static str> {
    Html("<h1>Dashboard</h1>")
}
