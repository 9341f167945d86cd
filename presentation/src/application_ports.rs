use application_ports::component_registry::ComponentRegistryPort;
use application_ports::interaction::ComponentInteractionPort;
use application_ports::reattachment::ReattachmentPort;
use std::sync::Arc;

pub trait Locator {
    fn get_component_registry_port(&self) -> Arc<dyn ComponentRegistryPort + Send + Sync>;
    fn get_component_interaction_port(&self) -> Arc<dyn ComponentInteractionPort + Send + Sync>;
    fn get_reattachment_port(&self) -> Arc<dyn ReattachmentPort + Send + Sync>;
}
