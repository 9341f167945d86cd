use crate::component_router::ComponentRouter;
use application_ports::component_registry::{ComponentRegistryError, ComponentRegistryPort};
use async_trait::async_trait;
use domain::bindings::{
    AutoroleBinding, BindingRepository, BindingRepositoryError, SetupBinding,
};
use domain::components::{autorole_message, setup_message};
use domain::ports::discord::{DiscordError, DiscordPort, Role};
use domain_shared::discord::{ChannelId, RoleId};
use std::sync::Arc;
use tracing::{error, info, instrument};

pub struct ComponentRegistryService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    binding_repository: Arc<dyn BindingRepository + Send + Sync>,
    router: Arc<ComponentRouter>,
}

impl ComponentRegistryService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        discord_port: Arc<dyn DiscordPort + Send + Sync>,
        binding_repository: Arc<dyn BindingRepository + Send + Sync>,
        router: Arc<ComponentRouter>,
    ) -> Self {
        Self {
            discord_port,
            binding_repository,
            router,
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn resolve_mentions(
        &self,
        role_mentions: &str,
    ) -> Result<Vec<Role>, ComponentRegistryError> {
        let mut roles: Vec<Role> = vec![];
        for role_id in parse_role_mentions(role_mentions) {
            if roles.iter().any(|role| role.role_id == role_id) {
                continue;
            }
            if let Some(role) = self
                .discord_port
                .find_role(role_id)
                .await
                .map_err(map_discord_err)?
            {
                roles.push(role);
            }
        }
        Ok(roles)
    }
}

#[async_trait]
impl ComponentRegistryPort for ComponentRegistryService {
    #[instrument(level = "info", skip(self))]
    async fn create_autorole(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<(), ComponentRegistryError> {
        let role = self
            .discord_port
            .find_role(role_id)
            .await
            .map_err(map_discord_err)?
            .ok_or(ComponentRegistryError::RoleNotFound)?;

        let message_id = self
            .discord_port
            .send_message(channel_id, autorole_message(&role))
            .await
            .map_err(map_discord_err)?;

        let mut bindings = self
            .binding_repository
            .load()
            .await
            .map_err(map_repository_err)?;
        bindings.bind_autorole(message_id, AutoroleBinding { channel_id, role_id });
        self.binding_repository
            .save(&bindings)
            .await
            .map_err(map_repository_err)?;

        self.router.bind_button(message_id, role_id).await;

        info!(
            message_id = message_id.0,
            role_id = role_id.0,
            "Autorole message created"
        );

        Ok(())
    }

    #[instrument(level = "info", skip(self, role_mentions))]
    async fn create_setup(
        &self,
        channel_id: ChannelId,
        role_mentions: &str,
    ) -> Result<(), ComponentRegistryError> {
        let roles = self.resolve_mentions(role_mentions).await?;
        if roles.is_empty() {
            return Err(ComponentRegistryError::NoValidRoles);
        }
        let role_ids: Vec<RoleId> = roles.iter().map(|role| role.role_id).collect();

        let message_id = self
            .discord_port
            .send_message(channel_id, setup_message(&roles))
            .await
            .map_err(map_discord_err)?;

        let mut bindings = self
            .binding_repository
            .load()
            .await
            .map_err(map_repository_err)?;
        bindings.bind_setup(
            message_id,
            SetupBinding {
                channel_id,
                role_ids: role_ids.clone(),
            },
        );
        self.binding_repository
            .save(&bindings)
            .await
            .map_err(map_repository_err)?;

        self.router.bind_selector(message_id, role_ids).await;

        info!(
            message_id = message_id.0,
            roles = roles.len(),
            "Setup message created"
        );

        Ok(())
    }
}

/// Parses comma-separated `<@&ID>` role mentions, dropping anything else.
/// Duplicates keep their first occurrence, so the descriptor order is the
/// first-seen order of the input.
#[instrument(level = "trace", skip(input))]
fn parse_role_mentions(input: &str) -> Vec<RoleId> {
    let mut role_ids: Vec<RoleId> = vec![];
    for token in input.replace(' ', "").split(',') {
        let id = token
            .strip_prefix("<@&")
            .and_then(|rest| rest.strip_suffix('>'))
            .and_then(|id| id.parse::<u64>().ok());
        if let Some(id) = id {
            let role_id = RoleId(id);
            if !role_ids.contains(&role_id) {
                role_ids.push(role_id);
            }
        }
    }
    role_ids
}

#[instrument(level = "trace", skip_all)]
fn map_discord_err(err: DiscordError) -> ComponentRegistryError {
    match err {
        DiscordError::DiscordUnavailable => {
            error!("DiscordError::DiscordUnavailable");
            ComponentRegistryError::TemporaryUnavailable
        }
    }
}

#[instrument(level = "trace", skip_all)]
fn map_repository_err(err: BindingRepositoryError) -> ComponentRegistryError {
    error!(error = ?err, "Binding repository failed");
    ComponentRegistryError::TemporaryUnavailable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_router::ComponentKind;
    use domain::bindings::{MessageBindings, MockBindingRepository};
    use domain::ports::discord::{CreateActionRow, MockDiscordPort};
    use domain_shared::discord::MessageId;

    fn role(id: u64, name: &str) -> Role {
        Role {
            role_id: RoleId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn mention_parsing_drops_malformed_tokens_and_duplicates() {
        let parsed = parse_role_mentions("<@&1>, <@&2>,<@&1>,garbage,<@&x>");
        assert_eq!(parsed, vec![RoleId(1), RoleId(2)]);
    }

    #[tokio::test]
    async fn autorole_sends_a_button_message_and_persists_the_binding() {
        let mut discord = MockDiscordPort::new();
        discord
            .expect_find_role()
            .returning(|_| Ok(Some(role(10, "blue"))));
        discord
            .expect_send_message()
            .withf(|channel_id, message| {
                let CreateActionRow::Buttons { components } = &message.action_rows[0] else {
                    return false;
                };
                *channel_id == ChannelId(5)
                    && message.content.as_deref() == Some("Click below to get the **blue** role:")
                    && components[0].button_id.0 == "autorole-10"
            })
            .returning(|_, _| Ok(MessageId(77)));

        let mut repository = MockBindingRepository::new();
        repository
            .expect_load()
            .returning(|| Ok(MessageBindings::default()));
        repository
            .expect_save()
            .withf(|bindings| {
                bindings.autoroles[&MessageId(77)]
                    == AutoroleBinding {
                        channel_id: ChannelId(5),
                        role_id: RoleId(10),
                    }
            })
            .once()
            .returning(|_| Ok(()));

        let router = Arc::new(ComponentRouter::default());
        let service = ComponentRegistryService::new(
            Arc::new(discord),
            Arc::new(repository),
            router.clone(),
        );

        service
            .create_autorole(ChannelId(5), RoleId(10))
            .await
            .unwrap();

        assert_eq!(
            router.resolve(MessageId(77)).await,
            Some(ComponentKind::Button { role_id: RoleId(10) })
        );
    }

    #[tokio::test]
    async fn setup_with_no_valid_roles_fails_before_any_side_effect() {
        let mut discord = MockDiscordPort::new();
        discord.expect_find_role().returning(|_| Ok(None));
        discord.expect_send_message().never();

        let mut repository = MockBindingRepository::new();
        repository.expect_save().never();

        let router = Arc::new(ComponentRouter::default());
        let service = ComponentRegistryService::new(
            Arc::new(discord),
            Arc::new(repository),
            router.clone(),
        );

        let result = service.create_setup(ChannelId(5), "<@&999>,<@&888>").await;

        assert!(matches!(result, Err(ComponentRegistryError::NoValidRoles)));
    }

    #[tokio::test]
    async fn setup_keeps_only_resolvable_roles_in_first_seen_order() {
        let mut discord = MockDiscordPort::new();
        discord.expect_find_role().returning(|role_id| {
            Ok(match role_id.0 {
                1 => Some(role(1, "red")),
                2 => Some(role(2, "blue")),
                _ => None,
            })
        });
        discord
            .expect_send_message()
            .returning(|_, _| Ok(MessageId(70)));

        let mut repository = MockBindingRepository::new();
        repository
            .expect_load()
            .returning(|| Ok(MessageBindings::default()));
        repository
            .expect_save()
            .withf(|bindings| {
                bindings.setups[&MessageId(70)].role_ids == vec![RoleId(1), RoleId(2)]
            })
            .once()
            .returning(|_| Ok(()));

        let router = Arc::new(ComponentRouter::default());
        let service = ComponentRegistryService::new(
            Arc::new(discord),
            Arc::new(repository),
            router.clone(),
        );

        service
            .create_setup(ChannelId(5), "<@&1>, <@&999>, <@&2>")
            .await
            .unwrap();

        assert_eq!(
            router.resolve(MessageId(70)).await,
            Some(ComponentKind::Selector {
                role_ids: vec![RoleId(1), RoleId(2)]
            })
        );
    }
}
