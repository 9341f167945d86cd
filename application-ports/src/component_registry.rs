use async_trait::async_trait;
use domain_shared::discord::{ChannelId, RoleId};
use thiserror::Error;

/// Creation side of the component registry: builds a descriptor, sends the
/// interactive message, and persists the message binding. Administrator
/// privilege is enforced upstream by the command middleware.
#[async_trait]
pub trait ComponentRegistryPort {
    /// Posts a single-role toggle button into `channel_id`.
    async fn create_autorole(
        &self,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<(), ComponentRegistryError>;

    /// Posts a multi-role selector into `channel_id`. `role_mentions` is
    /// free text of comma-separated role mentions; unresolvable tokens are
    /// dropped silently.
    async fn create_setup(
        &self,
        channel_id: ChannelId,
        role_mentions: &str,
    ) -> Result<(), ComponentRegistryError>;
}

#[derive(Debug, Error)]
pub enum ComponentRegistryError {
    #[error("Role not found")]
    RoleNotFound,
    #[error("No valid roles found")]
    NoValidRoles,
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
