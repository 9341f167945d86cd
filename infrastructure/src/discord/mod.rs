mod channel_id;
mod create_action_row;
mod create_button;
mod create_message;
mod create_select_menu;
mod message_id;
mod role_id;
mod user_id;

use crate::discord::channel_id::domain_to_serenity_channel_id;
use crate::discord::create_message::domain_to_serenity_create_message;
use crate::discord::message_id::serenity_to_domain_message_id;
use crate::discord::role_id::domain_to_serenity_role_id;
use crate::discord::user_id::domain_to_serenity_user_id;
use async_trait::async_trait;
use domain::ports::discord::{CreateMessage, DiscordError, DiscordPort, Role};
use domain_shared::discord::{ChannelId, MessageId, RoleId, UserId};
use poise::serenity_prelude as serenity;
use serenity::all::{Builder, GuildId, Http, HttpError};
use std::sync::Arc;
use tracing::{instrument, warn};

pub struct DiscordAdapter {
    client: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(client: Arc<Http>, guild_id: GuildId) -> Self {
        Self { client, guild_id }
    }
}

#[async_trait]
impl DiscordPort for DiscordAdapter {
    #[instrument(level = "debug", err, skip(self, message))]
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, DiscordError> {
        let message = domain_to_serenity_create_message(message);
        let channel_id = domain_to_serenity_channel_id(channel_id);

        let message = message
            .execute(&self.client, (channel_id, None))
            .await
            .map_err(map_serenity_err)?;

        Ok(serenity_to_domain_message_id(message.id))
    }

    #[instrument(level = "debug", skip(self))]
    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, DiscordError> {
        let channel_id = domain_to_serenity_channel_id(channel_id);

        match self.client.get_channel(channel_id).await {
            Ok(_) => Ok(true),
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 404 =>
            {
                Ok(false)
            }
            Err(err) => Err(map_serenity_err(err)),
        }
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn find_role(&self, role_id: RoleId) -> Result<Option<Role>, DiscordError> {
        let serenity_role_id = domain_to_serenity_role_id(role_id);

        let role = self
            .client
            .get_guild_roles(self.guild_id)
            .await
            .map_err(map_serenity_err)?
            .into_iter()
            .find(|role| role.id == serenity_role_id)
            .map(|role| Role {
                role_id,
                name: role.name,
            });

        Ok(role)
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn member_role_ids(&self, user_id: UserId) -> Result<Vec<RoleId>, DiscordError> {
        let user_id = domain_to_serenity_user_id(user_id);

        let member = self
            .client
            .get_member(self.guild_id, user_id)
            .await
            .map_err(map_serenity_err)?;

        Ok(member.roles.iter().map(|role_id| RoleId(role_id.get())).collect())
    }

    #[instrument(level = "debug", err, skip(self, reason))]
    async fn assign_user_to_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), DiscordError> {
        let user_id = domain_to_serenity_user_id(user_id);
        let role_id = domain_to_serenity_role_id(role_id);

        self.client
            .add_member_role(self.guild_id, user_id, role_id, Some(reason))
            .await
            .map_err(map_serenity_err)?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self, reason))]
    async fn remove_user_from_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), DiscordError> {
        let user_id = domain_to_serenity_user_id(user_id);
        let role_id = domain_to_serenity_role_id(role_id);

        self.client
            .remove_member_role(self.guild_id, user_id, role_id, Some(reason))
            .await
            .map_err(map_serenity_err)?;

        Ok(())
    }
}

fn map_serenity_err(err: serenity::Error) -> DiscordError {
    warn!(error = ?err, "Discord API call failed");
    DiscordError::DiscordUnavailable
}
