pub mod bindings;
pub mod components;
pub mod ports;
pub mod role_toggle;
