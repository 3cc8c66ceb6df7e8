// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Onboarding ---
        handlers::onboarding::submit_onboarding,

        // --- Invites ---
        handlers::invites::send_invite,
        handlers::invites::accept_invite,
        handlers::invites::validate_invite,

        // --- Organizations ---
        handlers::organizations::get_current_organization,
        handlers::organizations::update_organization_settings,

        // --- Members ---
        handlers::members::list_members,
        handlers::members::update_member,

        // --- RBAC ---
        handlers::rbac::list_permissions,
        handlers::rbac::effective_permissions,
        handlers::rbac::upsert_permission_override,

        // --- Funerals ---
        handlers::funerals::create_funeral,
        handlers::funerals::list_funerals,
        handlers::funerals::get_funeral,
        handlers::funerals::update_funeral,
        handlers::funerals::delete_funeral,
        handlers::funerals::add_contact,
        handlers::funerals::list_contacts,
        handlers::funerals::delete_contact,
        handlers::funerals::add_cost,
        handlers::funerals::list_costs,
        handlers::funerals::delete_cost,
        handlers::funerals::add_document,
        handlers::funerals::list_documents,
        handlers::funerals::delete_document,
        handlers::funerals::add_note,
        handlers::funerals::list_notes,
        handlers::funerals::delete_note,
        handlers::funerals::add_wish,
        handlers::funerals::list_wishes,
        handlers::funerals::update_wish,
        handlers::funerals::delete_wish,

        // --- Clients ---
        handlers::clients::create_client,
        handlers::clients::list_clients,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Suppliers ---
        handlers::suppliers::create_supplier,
        handlers::suppliers::list_suppliers,
        handlers::suppliers::update_supplier,
        handlers::suppliers::delete_supplier,
        handlers::suppliers::add_pricelist_item,
        handlers::suppliers::list_pricelist,
        handlers::suppliers::delete_pricelist_item,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Tenancy ---
            models::organization::Organization,
            models::organization::Profile,
            models::organization::UpdateOrganizationPayload,
            models::organization::OnboardingPayload,
            models::organization::OnboardingResponse,
            models::membership::MemberRole,
            models::membership::MemberStatus,
            models::membership::PermissionFlags,
            models::membership::OrganizationMember,
            models::membership::MemberWithEmail,
            models::membership::UpdateMemberPayload,

            // --- Invites ---
            models::invite::OrganizationInvite,
            models::invite::SendInvitePayload,
            models::invite::InviteOutcome,
            models::invite::SendInviteResponse,
            models::invite::AcceptInvitePayload,
            models::invite::ValidateInviteResponse,

            // --- RBAC ---
            models::rbac::PermissionDefinition,
            models::rbac::UserPermission,
            models::rbac::UpsertUserPermissionPayload,
            models::rbac::EffectivePermissionsResponse,

            // --- Funerals ---
            models::funeral::FuneralStatus,
            models::funeral::Funeral,
            models::funeral::CreateFuneralPayload,
            models::funeral::UpdateFuneralPayload,
            models::funeral::FuneralContact,
            models::funeral::CreateContactPayload,
            models::funeral::FuneralCost,
            models::funeral::CreateCostPayload,
            models::funeral::FuneralDocument,
            models::funeral::CreateDocumentPayload,
            models::funeral::FuneralNote,
            models::funeral::CreateNotePayload,
            models::funeral::FuneralWish,
            models::funeral::CreateWishPayload,
            models::funeral::UpdateWishPayload,

            // --- Clients ---
            models::client::Client,
            models::client::CreateClientPayload,
            models::client::UpdateClientPayload,

            // --- Suppliers ---
            models::supplier::Supplier,
            models::supplier::CreateSupplierPayload,
            models::supplier::UpdateSupplierPayload,
            models::supplier::PricelistItem,
            models::supplier::CreatePricelistItemPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Onboarding", description = "Provisionamento de Organização"),
        (name = "Invites", description = "Convites e Adesões"),
        (name = "Organizations", description = "Dados e Configurações do Tenant"),
        (name = "Members", description = "Membros da Organização"),
        (name = "RBAC", description = "Controle de Acesso (Permissões)"),
        (name = "Funerals", description = "Registos de Funerais"),
        (name = "Clients", description = "Clientes da Agência"),
        (name = "Suppliers", description = "Fornecedores e Tabelas de Preços")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
