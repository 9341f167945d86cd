use async_trait::async_trait;
use domain_shared::discord::{MessageId, RoleId, UserId};
use thiserror::Error;

/// Interaction side of the component registry: routes a user interaction on
/// a previously sent message to its descriptor and applies the role delta.
#[async_trait]
pub trait ComponentInteractionPort {
    async fn handle_button_press(
        &self,
        user_id: UserId,
        message_id: MessageId,
    ) -> Result<ToggleOutcomeDto, InteractionError>;

    async fn handle_selection(
        &self,
        user_id: UserId,
        message_id: MessageId,
        submitted: Vec<RoleId>,
    ) -> Result<SelectionOutcomeDto, InteractionError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum ToggleOutcomeDto {
    Granted { role_name: String },
    Revoked { role_name: String },
    /// The bound role no longer exists in the guild.
    RoleNotFound,
}

/// Labels of the roles that were added and removed, in descriptor order.
/// Both empty means the submission changed nothing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelectionOutcomeDto {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SelectionOutcomeDto {
    pub fn is_no_op(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum InteractionError {
    /// The message id is not bound to any live component.
    #[error("No component is bound to this message")]
    UnknownComponent,
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
