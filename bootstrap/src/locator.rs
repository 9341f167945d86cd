use application::component_registry::ComponentRegistryService;
use application::component_router::ComponentRouter;
use application::interaction::ComponentInteractionService;
use application::reattachment::ReattachmentService;
use application_ports::component_registry::ComponentRegistryPort;
use application_ports::interaction::ComponentInteractionPort;
use application_ports::reattachment::ReattachmentPort;
use domain::bindings::BindingRepository;
use domain::ports::discord::DiscordPort;
use infrastructure::discord::DiscordAdapter;
use infrastructure::storage::JsonBindingRepository;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

pub struct ApplicationPortLocator {
    component_registry_adapter: Arc<ComponentRegistryService>,
    component_interaction_adapter: Arc<ComponentInteractionService>,
    reattachment_adapter: Arc<ReattachmentService>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        discord_adapter: Arc<DiscordAdapter>,
        binding_repository: Arc<JsonBindingRepository>,
    ) -> Self {
        // One routing table shared by creation, interaction and reattachment.
        let router = Arc::new(ComponentRouter::default());

        let discord_port: Arc<dyn DiscordPort + Send + Sync> = discord_adapter;
        let binding_repository: Arc<dyn BindingRepository + Send + Sync> = binding_repository;

        Self {
            component_registry_adapter: Arc::new(ComponentRegistryService::new(
                discord_port.clone(),
                binding_repository.clone(),
                router.clone(),
            )),
            component_interaction_adapter: Arc::new(ComponentInteractionService::new(
                discord_port.clone(),
                router.clone(),
            )),
            reattachment_adapter: Arc::new(ReattachmentService::new(
                discord_port,
                binding_repository,
                router,
            )),
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_component_registry_port(&self) -> Arc<dyn ComponentRegistryPort + Send + Sync> {
        self.component_registry_adapter.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_component_interaction_port(&self) -> Arc<dyn ComponentInteractionPort + Send + Sync> {
        self.component_interaction_adapter.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_reattachment_port(&self) -> Arc<dyn ReattachmentPort + Send + Sync> {
        self.reattachment_adapter.clone()
    }
}
