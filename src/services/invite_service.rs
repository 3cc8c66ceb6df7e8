// src/services/invite_service.rs

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{InviteRepository, MembershipRepository, OrganizationRepository},
    models::{
        auth::User,
        invite::{InviteOutcome, SendInviteResponse, ValidateInviteResponse},
        membership::{MemberRole, OrganizationMember, PermissionFlags},
    },
    services::auth::AuthService,
};

// Validade de um convite pendente.
const INVITE_TTL_DAYS: i64 = 7;

#[derive(Clone)]
pub struct InviteService {
    invite_repo: InviteRepository,
    membership_repo: MembershipRepository,
    org_repo: OrganizationRepository,
    auth_service: AuthService,
    pool: PgPool,
}

impl InviteService {
    pub fn new(
        invite_repo: InviteRepository,
        membership_repo: MembershipRepository,
        org_repo: OrganizationRepository,
        auth_service: AuthService,
        pool: PgPool,
    ) -> Self {
        Self { invite_repo, membership_repo, org_repo, auth_service, pool }
    }

    /// Convida um e-mail para a organização. Quem convida tem de ser membro
    /// ativo com cargo owner ou admin; qualquer passo que falhe aborta a
    /// operação inteira.
    pub async fn send_invite(
        &self,
        requester_id: Uuid,
        organization_id: Uuid,
        email: &str,
        role: MemberRole,
    ) -> Result<SendInviteResponse, AppError> {
        // 1. Autorização do requisitante.
        let requester = self
            .membership_repo
            .find_member(&self.pool, organization_id, requester_id)
            .await?;
        ensure_can_invite(requester.as_ref())?;

        // 2. O e-mail já tem conta? A decisão do ramo é pura; só os efeitos
        // tocam no banco.
        let existing_user = self.auth_service.find_user_by_email(email).await?;
        let outcome = classify_invitee(existing_user.as_ref());

        match existing_user {
            // 3. Conta existente: vira membro ativo imediatamente.
            Some(user) => {
                self.membership_repo
                    .insert_member(
                        &self.pool,
                        organization_id,
                        user.id,
                        role,
                        PermissionFlags::for_role(role),
                    )
                    .await?;
            }
            // 4. Sem conta: fica um convite pendente; a entrega do e-mail é
            // responsabilidade do colaborador externo de e-mail.
            None => {
                let invite = self
                    .invite_repo
                    .insert_invite(
                        &self.pool,
                        organization_id,
                        email,
                        role,
                        requester_id,
                        Utc::now() + Duration::days(INVITE_TTL_DAYS),
                    )
                    .await?;

                tracing::info!(
                    organization_id = %organization_id,
                    email = %email,
                    token = %invite.token,
                    "Convite pendente criado; entrega delegada ao serviço de e-mail"
                );
            }
        }

        Ok(SendInviteResponse {
            outcome,
            organization_id,
            email: email.to_string(),
        })
    }

    /// Aceitação (entrada separada): o convidado, já autenticado, entrega o
    /// token. Só aqui é que a linha de membro é criada.
    pub async fn accept_invite(
        &self,
        user_id: Uuid,
        token: Uuid,
    ) -> Result<OrganizationMember, AppError> {
        let mut tx = self.pool.begin().await?;

        // Convite aceite ou fora da validade conta como inexistente.
        let invite = self
            .invite_repo
            .find_by_token(&mut *tx, token)
            .await?
            .filter(|invite| invite.is_pending(Utc::now()))
            .ok_or(AppError::InviteNotFound)?;

        let member = self
            .membership_repo
            .insert_member(
                &mut *tx,
                invite.organization_id,
                user_id,
                invite.role,
                PermissionFlags::for_role(invite.role),
            )
            .await?;

        self.invite_repo.mark_accepted(&mut *tx, invite.id).await?;

        tx.commit().await?;

        Ok(member)
    }

    /// Validação sem sessão: devolve o nome da organização ou 404.
    pub async fn validate_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<ValidateInviteResponse, AppError> {
        let org = self
            .org_repo
            .find_organization(organization_id)
            .await?
            .ok_or(AppError::OrganizationNotFound)?;

        Ok(ValidateInviteResponse {
            organization_id: org.id,
            organization_name: org.name,
        })
    }
}

/// O requisitante tem de ser membro ATIVO com cargo owner ou admin.
/// Qualquer outra combinação é 403, sem nenhuma escrita no banco.
fn ensure_can_invite(requester: Option<&OrganizationMember>) -> Result<(), AppError> {
    let Some(member) = requester else {
        return Err(AppError::Forbidden(
            "Você não é membro desta organização.".to_string(),
        ));
    };

    if !member.is_active() || !matches!(member.role, MemberRole::Owner | MemberRole::Admin) {
        return Err(AppError::Forbidden(
            "Apenas owners e admins podem convidar membros.".to_string(),
        ));
    }

    Ok(())
}

/// E-mail com conta vira membro imediato; sem conta fica convite pendente.
fn classify_invitee(existing_user: Option<&User>) -> InviteOutcome {
    if existing_user.is_some() {
        InviteOutcome::ExistingUser
    } else {
        InviteOutcome::NewUser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::membership::MemberStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn member(role: MemberRole, status: MemberStatus) -> OrganizationMember {
        let now = Utc::now();
        let flags = PermissionFlags::for_role(role);

        OrganizationMember {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role,
            status,
            can_manage_users: flags.can_manage_users,
            can_manage_funerals: flags.can_manage_funerals,
            can_manage_clients: flags.can_manage_clients,
            can_manage_suppliers: flags.can_manage_suppliers,
            can_view_financials: flags.can_view_financials,
            can_manage_settings: flags.can_manage_settings,
            created_at: now,
            updated_at: now,
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "colega@funeraria.example".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn non_member_cannot_invite() {
        assert!(matches!(
            ensure_can_invite(None),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn inactive_admin_cannot_invite() {
        let requester = member(MemberRole::Admin, MemberStatus::Inactive);

        assert!(matches!(
            ensure_can_invite(Some(&requester)),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn active_editor_and_viewer_cannot_invite() {
        for role in [MemberRole::Editor, MemberRole::Viewer] {
            let requester = member(role, MemberStatus::Active);

            assert!(matches!(
                ensure_can_invite(Some(&requester)),
                Err(AppError::Forbidden(_))
            ));
        }
    }

    #[test]
    fn active_owner_and_admin_can_invite() {
        for role in [MemberRole::Owner, MemberRole::Admin] {
            let requester = member(role, MemberStatus::Active);

            assert!(ensure_can_invite(Some(&requester)).is_ok());
        }
    }

    #[test]
    fn known_email_becomes_immediate_member() {
        let invitee = user();

        assert_eq!(classify_invitee(Some(&invitee)), InviteOutcome::ExistingUser);
    }

    #[test]
    fn unknown_email_gets_pending_invite() {
        assert_eq!(classify_invitee(None), InviteOutcome::NewUser);
    }
}
