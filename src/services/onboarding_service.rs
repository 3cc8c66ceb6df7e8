// src/services/onboarding_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{MembershipRepository, OrganizationRepository},
    models::{
        membership::{MemberRole, PermissionFlags},
        organization::{OnboardingPayload, OnboardingResponse},
    },
};

#[derive(Clone)]
pub struct OnboardingService {
    org_repo: OrganizationRepository,
    membership_repo: MembershipRepository,
    pool: PgPool, // Usamos a pool para iniciar transações
}

impl OnboardingService {
    pub fn new(
        org_repo: OrganizationRepository,
        membership_repo: MembershipRepository,
        pool: PgPool,
    ) -> Self {
        Self { org_repo, membership_repo, pool }
    }

    /// LÓGICA DE NEGÓCIO: garante o triplo consistente
    /// (Profile, Organization, OrganizationMember) para o utilizador.
    ///
    /// Idempotente e reentrante: submeter duas vezes atualiza em vez de
    /// duplicar. Toda a sequência corre numa única transação, portanto uma
    /// falha a meio não deixa linhas órfãs.
    pub async fn provision(
        &self,
        user_id: Uuid,
        payload: &OnboardingPayload,
    ) -> Result<OnboardingResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        // 1. Perfil: cria se não existe, atualiza se existe.
        let existing_profile = self.org_repo.find_profile(&mut *tx, user_id).await?;

        let profile = match &existing_profile {
            None => {
                self.org_repo
                    .insert_profile(
                        &mut *tx,
                        user_id,
                        &payload.first_name,
                        &payload.last_name,
                        payload.phone.as_deref(),
                    )
                    .await?
            }
            Some(_) => {
                self.org_repo
                    .update_profile(
                        &mut *tx,
                        user_id,
                        &payload.first_name,
                        &payload.last_name,
                        payload.phone.as_deref(),
                    )
                    .await?
            }
        };

        // 2. Resolve a organização: vínculo do perfil, senão adesão ativa.
        // Um utilizador que já é membro mas cujo perfil perdeu o vínculo
        // recebe o backfill sem criar uma organização duplicada.
        let membership_org = if profile.organization_id.is_none() {
            self.membership_repo
                .find_active_membership(&mut *tx, user_id)
                .await?
                .map(|m| m.organization_id)
        } else {
            None
        };

        // 3. Ainda nenhuma? Cria a organização a partir dos dados da empresa.
        let organization_id = match resolve_organization(profile.organization_id, membership_org) {
            Some(id) => id,
            None => {
                let org = self
                    .org_repo
                    .create_organization(
                        &mut *tx,
                        &payload.company_name,
                        payload.company_address.as_deref(),
                        payload.company_postal_code.as_deref(),
                        payload.company_city.as_deref(),
                        payload.company_phone.as_deref(),
                        payload.company_email.as_deref(),
                    )
                    .await?;
                org.id
            }
        };

        // 4. Upsert do membro dono com todas as capacidades.
        self.membership_repo
            .upsert_member(
                &mut *tx,
                organization_id,
                user_id,
                MemberRole::Owner,
                PermissionFlags::all(),
            )
            .await?;

        // 5. Vincula o perfil e marca o onboarding como concluído.
        let profile = self
            .org_repo
            .link_profile_to_organization(&mut *tx, user_id, organization_id)
            .await?;

        tx.commit().await?;

        let organization = self
            .org_repo
            .find_organization(organization_id)
            .await?
            .ok_or(AppError::OrganizationNotFound)?;

        tracing::info!(
            user_id = %user_id,
            organization_id = %organization_id,
            "Onboarding provisionado"
        );

        Ok(OnboardingResponse { profile, organization })
    }
}

/// Decisão pura do passo 2/3: o vínculo do perfil prevalece, depois uma
/// adesão ativa existente; `None` significa criar uma organização nova.
/// É isto que torna a submissão repetida segura: enquanto houver um
/// vínculo ou uma adesão, nenhuma organização é duplicada.
fn resolve_organization(
    profile_link: Option<Uuid>,
    active_membership: Option<Uuid>,
) -> Option<Uuid> {
    profile_link.or(active_membership)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resubmission_reuses_profile_linked_organization() {
        let org = Uuid::new_v4();

        assert_eq!(resolve_organization(Some(org), None), Some(org));
        // O vínculo do perfil prevalece sobre qualquer outra adesão.
        assert_eq!(resolve_organization(Some(org), Some(Uuid::new_v4())), Some(org));
    }

    #[test]
    fn orphan_membership_is_backfilled_without_new_organization() {
        let org = Uuid::new_v4();

        assert_eq!(resolve_organization(None, Some(org)), Some(org));
    }

    #[test]
    fn first_submission_requires_a_new_organization() {
        assert_eq!(resolve_organization(None, None), None);
    }
}
