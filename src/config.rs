// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        ClientRepository, FuneralRepository, InviteRepository, MembershipRepository,
        OrganizationRepository, RbacRepository, SupplierRepository, UserRepository,
    },
    services::{
        auth::AuthService, client_service::ClientService, funeral_service::FuneralService,
        invite_service::InviteService, membership_service::MembershipService,
        onboarding_service::OnboardingService, rbac_service::RbacService,
        supplier_service::SupplierService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação.
// Tudo injetado explicitamente: nada de singletons globais.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub onboarding_service: OnboardingService,
    pub invite_service: InviteService,
    pub membership_service: MembershipService,
    pub rbac_service: RbacService,
    pub funeral_service: FuneralService,
    pub client_service: ClientService,
    pub supplier_service: SupplierService,

    // Repositórios usados diretamente pelos middlewares
    pub membership_repo: MembershipRepository,
    pub org_repo: OrganizationRepository,
}

impl AppState {
    // Carrega as configurações e monta o estado da aplicação.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Variáveis obrigatórias: sem elas, a aplicação não deve arrancar.
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let org_repo = OrganizationRepository::new(db_pool.clone());
        let membership_repo = MembershipRepository::new(db_pool.clone());
        let invite_repo = InviteRepository::new(db_pool.clone());
        let rbac_repo = RbacRepository::new(db_pool.clone());
        let funeral_repo = FuneralRepository::new(db_pool.clone());
        let client_repo = ClientRepository::new(db_pool.clone());
        let supplier_repo = SupplierRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret, db_pool.clone());
        let onboarding_service = OnboardingService::new(
            org_repo.clone(),
            membership_repo.clone(),
            db_pool.clone(),
        );
        let invite_service = InviteService::new(
            invite_repo,
            membership_repo.clone(),
            org_repo.clone(),
            auth_service.clone(),
            db_pool.clone(),
        );
        let membership_service = MembershipService::new(membership_repo.clone());
        let rbac_service = RbacService::new(rbac_repo);
        let funeral_service = FuneralService::new(funeral_repo, db_pool.clone());
        let client_service = ClientService::new(client_repo);
        let supplier_service = SupplierService::new(supplier_repo);

        Ok(Self {
            db_pool,
            auth_service,
            onboarding_service,
            invite_service,
            membership_service,
            rbac_service,
            funeral_service,
            client_service,
            supplier_service,
            membership_repo,
            org_repo,
        })
    }
}
