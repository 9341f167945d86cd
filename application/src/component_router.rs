use domain_shared::discord::{MessageId, RoleId};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::instrument;

/// What a message's interactive component does. Derived from the store,
/// never authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    Button { role_id: RoleId },
    Selector { role_ids: Vec<RoleId> },
}

/// Routing table from a message id to its component, built once at
/// reattachment and updated on every creation. Interactions on messages
/// without an entry are unroutable.
#[derive(Default)]
pub struct ComponentRouter {
    entries: RwLock<HashMap<MessageId, ComponentKind>>,
}

impl ComponentRouter {
    #[instrument(level = "debug", skip(self))]
    pub async fn bind_button(&self, message_id: MessageId, role_id: RoleId) {
        self.entries
            .write()
            .await
            .insert(message_id, ComponentKind::Button { role_id });
    }

    #[instrument(level = "debug", skip(self, role_ids))]
    pub async fn bind_selector(&self, message_id: MessageId, role_ids: Vec<RoleId>) {
        self.entries
            .write()
            .await
            .insert(message_id, ComponentKind::Selector { role_ids });
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn resolve(&self, message_id: MessageId) -> Option<ComponentKind> {
        self.entries.read().await.get(&message_id).cloned()
    }
}
