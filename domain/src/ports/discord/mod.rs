mod create_action_row;
mod create_button;
mod create_message;
mod create_select_menu;
mod role;

pub use create_action_row::CreateActionRow;
pub use create_button::{ButtonId, CreateButton};
pub use create_message::CreateMessage;
pub use create_select_menu::{CreateSelectMenu, SelectOption};
pub use role::Role;

use async_trait::async_trait;
use domain_shared::discord::{ChannelId, MessageId, RoleId, UserId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordPort {
    /// Sends a message and returns the id Discord assigned to it.
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, DiscordError>;

    async fn channel_exists(&self, channel_id: ChannelId) -> Result<bool, DiscordError>;

    /// Resolves a role id against the guild; `None` when the role no
    /// longer exists.
    async fn find_role(&self, role_id: RoleId) -> Result<Option<Role>, DiscordError>;

    async fn member_role_ids(&self, user_id: UserId) -> Result<Vec<RoleId>, DiscordError>;

    async fn assign_user_to_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), DiscordError>;

    async fn remove_user_from_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), DiscordError>;
}

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Discord is unavailable")]
    DiscordUnavailable,
}
