use crate::component_router::ComponentRouter;
use application_ports::reattachment::{ReattachmentError, ReattachmentPort, ReattachmentReport};
use async_trait::async_trait;
use domain::bindings::{BindingRepository, BindingRepositoryError};
use domain::ports::discord::DiscordPort;
use domain_shared::discord::ChannelId;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Rebuilds the component routing table from the durable store after a
/// restart. Registration only: nothing is re-sent and nothing is saved,
/// so running it again is harmless.
pub struct ReattachmentService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    binding_repository: Arc<dyn BindingRepository + Send + Sync>,
    router: Arc<ComponentRouter>,
}

impl ReattachmentService {
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

    /// Stale or unreachable channels make the binding inert, never fatal.
    #[instrument(level = "trace", skip(self))]
    async fn channel_resolves(&self, channel_id: ChannelId) -> bool {
        match self.discord_port.channel_exists(channel_id).await {
            Ok(exists) => exists,
            Err(err) => {
                warn!(
                    channel_id = channel_id.0,
                    error = ?err,
                    "Could not resolve channel, skipping binding"
                );
                false
            }
        }
    }
}

#[async_trait]
impl ReattachmentPort for ReattachmentService {
    #[instrument(level = "info", skip(self))]
    async fn reattach(&self) -> Result<ReattachmentReport, ReattachmentError> {
        let bindings = self
            .binding_repository
            .load()
            .await
            .map_err(map_repository_err)?;

        let mut report = ReattachmentReport::default();

        for (message_id, binding) in &bindings.autoroles {
            if !self.channel_resolves(binding.channel_id).await {
                report.skipped += 1;
                continue;
            }
            self.router.bind_button(*message_id, binding.role_id).await;
            report.buttons += 1;
        }

        for (message_id, binding) in &bindings.setups {
            if !self.channel_resolves(binding.channel_id).await {
                report.skipped += 1;
                continue;
            }

            let mut surviving_roles = vec![];
            for role_id in &binding.role_ids {
                match self.discord_port.find_role(*role_id).await {
                    Ok(Some(role)) => surviving_roles.push(role.role_id),
                    Ok(None) => {
                        warn!(
                            message_id = message_id.0,
                            role_id = role_id.0,
                            "Stored role no longer exists"
                        );
                    }
                    Err(err) => {
                        warn!(
                            message_id = message_id.0,
                            role_id = role_id.0,
                            error = ?err,
                            "Could not resolve stored role"
                        );
                    }
                }
            }

            if surviving_roles.is_empty() {
                warn!(
                    message_id = message_id.0,
                    "No stored role resolves anymore, selector left inert"
                );
                report.skipped += 1;
                continue;
            }

            self.router
                .bind_selector(*message_id, surviving_roles)
                .await;
            report.selectors += 1;
        }

        info!(
            buttons = report.buttons,
            selectors = report.selectors,
            skipped = report.skipped,
            "Reattached persistent components"
        );

        Ok(report)
    }
}

#[instrument(level = "trace", skip_all)]
fn map_repository_err(err: BindingRepositoryError) -> ReattachmentError {
    match err {
        BindingRepositoryError::Corrupt(reason) => ReattachmentError::StorageCorrupt(reason),
        BindingRepositoryError::Unavailable => ReattachmentError::TemporaryUnavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_router::ComponentKind;
    use domain::bindings::{AutoroleBinding, MessageBindings, MockBindingRepository, SetupBinding};
    use domain::ports::discord::{MockDiscordPort, Role};
    use domain_shared::discord::{MessageId, RoleId};

    #[tokio::test]
    async fn partially_resolvable_setup_reattaches_over_the_survivors() {
        let mut repository = MockBindingRepository::new();
        repository.expect_load().returning(|| {
            let mut bindings = MessageBindings::default();
            bindings.bind_setup(
                MessageId(9),
                SetupBinding {
                    channel_id: ChannelId(5),
                    role_ids: vec![RoleId(1), RoleId(2), RoleId(3)],
                },
            );
            Ok(bindings)
        });

        let mut discord = MockDiscordPort::new();
        discord.expect_channel_exists().returning(|_| Ok(true));
        discord.expect_find_role().returning(|role_id| {
            Ok(match role_id.0 {
                1 | 2 => Some(Role {
                    role_id,
                    name: format!("role-{}", role_id.0),
                }),
                _ => None,
            })
        });

        let router = Arc::new(ComponentRouter::default());
        let service =
            ReattachmentService::new(Arc::new(discord), Arc::new(repository), router.clone());

        let report = service.reattach().await.unwrap();

        assert_eq!(report.selectors, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(
            router.resolve(MessageId(9)).await,
            Some(ComponentKind::Selector {
                role_ids: vec![RoleId(1), RoleId(2)]
            })
        );
    }

    #[tokio::test]
    async fn setup_whose_roles_all_vanished_is_skipped_silently() {
        let mut repository = MockBindingRepository::new();
        repository.expect_load().returning(|| {
            let mut bindings = MessageBindings::default();
            bindings.bind_setup(
                MessageId(9),
                SetupBinding {
                    channel_id: ChannelId(5),
                    role_ids: vec![RoleId(1), RoleId(2)],
                },
            );
            Ok(bindings)
        });

        let mut discord = MockDiscordPort::new();
        discord.expect_channel_exists().returning(|_| Ok(true));
        discord.expect_find_role().returning(|_| Ok(None));

        let router = Arc::new(ComponentRouter::default());
        let service =
            ReattachmentService::new(Arc::new(discord), Arc::new(repository), router.clone());

        let report = service.reattach().await.unwrap();

        assert_eq!(report.selectors, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(router.resolve(MessageId(9)).await, None);
    }

    #[tokio::test]
    async fn autorole_in_a_deleted_channel_is_skipped() {
        let mut repository = MockBindingRepository::new();
        repository.expect_load().returning(|| {
            let mut bindings = MessageBindings::default();
            bindings.bind_autorole(
                MessageId(77),
                AutoroleBinding {
                    channel_id: ChannelId(5),
                    role_id: RoleId(10),
                },
            );
            Ok(bindings)
        });

        let mut discord = MockDiscordPort::new();
        discord.expect_channel_exists().returning(|_| Ok(false));

        let router = Arc::new(ComponentRouter::default());
        let service =
            ReattachmentService::new(Arc::new(discord), Arc::new(repository), router.clone());

        let report = service.reattach().await.unwrap();

        assert_eq!(report.buttons, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(router.resolve(MessageId(77)).await, None);
    }

    #[tokio::test]
    async fn corrupt_storage_aborts_reattachment() {
        let mut repository = MockBindingRepository::new();
        repository
            .expect_load()
            .returning(|| Err(domain::bindings::BindingRepositoryError::Corrupt(
                "bad json".to_string(),
            )));

        let discord = MockDiscordPort::new();
        let router = Arc::new(ComponentRouter::default());
        let service = ReattachmentService::new(Arc::new(discord), Arc::new(repository), router);

        let result = service.reattach().await;

        assert!(matches!(
            result,
            Err(ReattachmentError::StorageCorrupt(reason)) if reason == "bad json"
        ));
    }
}
