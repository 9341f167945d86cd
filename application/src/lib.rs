pub mod component_registry;
pub mod component_router;
pub mod interaction;
pub mod reattachment;
