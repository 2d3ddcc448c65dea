//! Credential validation and the auth-flow state machine.

pub mod events;
pub mod flow;
pub mod password;
pub mod validate;
