// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{common::error::AppError, models::membership::OrganizationMember};

/// 1. O Trait que define o que é uma Capacidade
pub trait CapabilityDef: Send + Sync + 'static {
    fn name() -> &'static str;
    fn check(member: &OrganizationMember) -> bool;
}

/// 2. O Extractor (Guardião): exige que o membro atual tenha a capacidade T.
/// Depende do `org_guard` já ter injetado a linha de membro.
pub struct RequireCapability<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireCapability<T>
where
    T: CapabilityDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let member = parts.extensions.get::<OrganizationMember>().ok_or_else(|| {
            AppError::Forbidden("Contexto da organização não encontrado.".to_string())
        })?;

        if !T::check(member) {
            return Err(AppError::Forbidden(format!(
                "Você precisa da capacidade '{}' para realizar esta ação.",
                T::name()
            )));
        }

        Ok(RequireCapability(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS CAPACIDADES (TIPOS)
// ---

pub struct CanManageFunerals;
impl CapabilityDef for CanManageFunerals {
    fn name() -> &'static str {
        "manage_funerals"
    }
    fn check(member: &OrganizationMember) -> bool {
        member.can_manage_funerals
    }
}

pub struct CanManageClients;
impl CapabilityDef for CanManageClients {
    fn name() -> &'static str {
        "manage_clients"
    }
    fn check(member: &OrganizationMember) -> bool {
        member.can_manage_clients
    }
}

pub struct CanManageSuppliers;
impl CapabilityDef for CanManageSuppliers {
    fn name() -> &'static str {
        "manage_suppliers"
    }
    fn check(member: &OrganizationMember) -> bool {
        member.can_manage_suppliers
    }
}

pub struct CanManageUsers;
impl CapabilityDef for CanManageUsers {
    fn name() -> &'static str {
        "manage_users"
    }
    fn check(member: &OrganizationMember) -> bool {
        member.can_manage_users
    }
}

pub struct CanViewFinancials;
impl CapabilityDef for CanViewFinancials {
    fn name() -> &'static str {
        "view_financials"
    }
    fn check(member: &OrganizationMember) -> bool {
        member.can_view_financials
    }
}

pub struct CanManageSettings;
impl CapabilityDef for CanManageSettings {
    fn name() -> &'static str {
        "manage_settings"
    }
    fn check(member: &OrganizationMember) -> bool {
        member.can_manage_settings
    }
}
