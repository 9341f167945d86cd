use crate::component_router::{ComponentKind, ComponentRouter};
use application_ports::interaction::{
    ComponentInteractionPort, InteractionError, SelectionOutcomeDto, ToggleOutcomeDto,
};
use async_trait::async_trait;
use domain::ports::discord::{DiscordError, DiscordPort, Role};
use domain::role_toggle::{sync_selection, toggle_role, ToggleAction};
use domain_shared::discord::{MessageId, RoleId, UserId};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

const TOGGLE_REASON: &str = "Self-service role toggle";
const SELECTION_REASON: &str = "Self-service role selection";

pub struct ComponentInteractionService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    router: Arc<ComponentRouter>,
}

impl ComponentInteractionService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        discord_port: Arc<dyn DiscordPort + Send + Sync>,
        router: Arc<ComponentRouter>,
    ) -> Self {
        Self {
            discord_port,
            router,
        }
    }

    /// Resolves the stored candidate ids to live roles, dropping the ones
    /// that no longer exist in the guild.
    #[instrument(level = "trace", skip(self, role_ids))]
    async fn resolve_candidates(
        &self,
        role_ids: &[RoleId],
    ) -> Result<Vec<Role>, InteractionError> {
        let mut candidates = vec![];
        for role_id in role_ids {
            match self
                .discord_port
                .find_role(*role_id)
                .await
                .map_err(map_discord_err)?
            {
                Some(role) => candidates.push(role),
                None => warn!(role_id = role_id.0, "Dropping stale role from selector"),
            }
        }
        Ok(candidates)
    }
}

#[async_trait]
impl ComponentInteractionPort for ComponentInteractionService {
    #[instrument(level = "info", skip(self))]
    async fn handle_button_press(
        &self,
        user_id: UserId,
        message_id: MessageId,
    ) -> Result<ToggleOutcomeDto, InteractionError> {
        let Some(ComponentKind::Button { role_id }) = self.router.resolve(message_id).await
        else {
            return Err(InteractionError::UnknownComponent);
        };

        let Some(role) = self
            .discord_port
            .find_role(role_id)
            .await
            .map_err(map_discord_err)?
        else {
            warn!(role_id = role_id.0, "Bound role no longer exists");
            return Ok(ToggleOutcomeDto::RoleNotFound);
        };

        let held_roles = self
            .discord_port
            .member_role_ids(user_id)
            .await
            .map_err(map_discord_err)?;

        let outcome = match toggle_role(&held_roles, role_id) {
            ToggleAction::Grant => {
                self.discord_port
                    .assign_user_to_role(user_id, role_id, TOGGLE_REASON)
                    .await
                    .map_err(map_discord_err)?;
                ToggleOutcomeDto::Granted {
                    role_name: role.name,
                }
            }
            ToggleAction::Revoke => {
                self.discord_port
                    .remove_user_from_role(user_id, role_id, TOGGLE_REASON)
                    .await
                    .map_err(map_discord_err)?;
                ToggleOutcomeDto::Revoked {
                    role_name: role.name,
                }
            }
        };

        info!(
            user_id = user_id.0,
            role_id = role_id.0,
            outcome = ?outcome,
            "Role toggled"
        );

        Ok(outcome)
    }

    #[instrument(level = "info", skip(self, submitted))]
    async fn handle_selection(
        &self,
        user_id: UserId,
        message_id: MessageId,
        submitted: Vec<RoleId>,
    ) -> Result<SelectionOutcomeDto, InteractionError> {
        let Some(ComponentKind::Selector { role_ids }) = self.router.resolve(message_id).await
        else {
            return Err(InteractionError::UnknownComponent);
        };

        let candidates = self.resolve_candidates(&role_ids).await?;
        let held_roles = self
            .discord_port
            .member_role_ids(user_id)
            .await
            .map_err(map_discord_err)?;

        let diff = sync_selection(&candidates, &held_roles, &submitted);

        for role in &diff.to_add {
            self.discord_port
                .assign_user_to_role(user_id, role.role_id, SELECTION_REASON)
                .await
                .map_err(map_discord_err)?;
        }
        for role in &diff.to_remove {
            self.discord_port
                .remove_user_from_role(user_id, role.role_id, SELECTION_REASON)
                .await
                .map_err(map_discord_err)?;
        }

        info!(
            user_id = user_id.0,
            added = diff.to_add.len(),
            removed = diff.to_remove.len(),
            "Selection applied"
        );

        Ok(SelectionOutcomeDto {
            added: diff.to_add.into_iter().map(|role| role.name).collect(),
            removed: diff.to_remove.into_iter().map(|role| role.name).collect(),
        })
    }
}

#[instrument(level = "trace", skip_all)]
fn map_discord_err(err: DiscordError) -> InteractionError {
    match err {
        DiscordError::DiscordUnavailable => {
            error!("DiscordError::DiscordUnavailable");
            InteractionError::TemporaryUnavailable
        }
    }
}
