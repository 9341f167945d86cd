pub mod permission_denied;
pub mod unavailable;
