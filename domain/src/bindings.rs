use async_trait::async_trait;
use domain_shared::discord::{ChannelId, MessageId, RoleId};
use std::collections::HashMap;
use thiserror::Error;

/// Descriptor of a single-role button message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoroleBinding {
    pub channel_id: ChannelId,
    pub role_id: RoleId,
}

/// Descriptor of a multi-role selector message. `role_ids` keeps the
/// first-seen order of the roles the selector was created over; the
/// selection diff is computed and reported in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupBinding {
    pub channel_id: ChannelId,
    pub role_ids: Vec<RoleId>,
}

/// The persisted message → component associations. The message id is the
/// unique key across the whole store. There is no delete path; bindings
/// whose message or channel is gone are skipped at reattachment and left
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBindings {
    pub autoroles: HashMap<MessageId, AutoroleBinding>,
    pub setups: HashMap<MessageId, SetupBinding>,
}

impl MessageBindings {
    pub fn bind_autorole(&mut self, message_id: MessageId, binding: AutoroleBinding) {
        self.autoroles.insert(message_id, binding);
    }

    pub fn bind_setup(&mut self, message_id: MessageId, binding: SetupBinding) {
        self.setups.insert(message_id, binding);
    }

    pub fn is_empty(&self) -> bool {
        self.autoroles.is_empty() && self.setups.is_empty()
    }
}

/// Durable store of the bindings. The store is the sole source of truth;
/// every mutation round-trips load → mutate → save, callers never keep a
/// copy across await points.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait BindingRepository {
    /// Returns the persisted bindings, or an empty set on first run.
    async fn load(&self) -> Result<MessageBindings, BindingRepositoryError>;
    /// Writes the whole state, replacing any previous content.
    async fn save(&self, bindings: &MessageBindings) -> Result<(), BindingRepositoryError>;
}

#[derive(Debug, Error)]
pub enum BindingRepositoryError {
    #[error("Stored bindings are corrupt: {0}")]
    Corrupt(String),
    #[error("Storage unavailable")]
    Unavailable,
}
