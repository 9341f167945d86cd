pub mod component_registry;
pub mod interaction;
pub mod reattachment;
