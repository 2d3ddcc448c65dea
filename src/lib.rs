//! # EcoWatch account client
//!
//! Client-side core of the EcoWatch environmental-incident reporting
//! product: password-strength evaluation, form validation, the auth-flow
//! state machine shared by signup, login and password reset, and the
//! session marker persisted between runs.
//!
//! Flows are presentation-neutral. A host (the bundled CLI, a GUI shell,
//! tests) owns a flow value, feeds it field changes, submits it, and
//! renders the [`auth::events::UiEvent`]s it emits. The account service is
//! an external collaborator reached only through [`account::AccountClient`].

pub mod account;
pub mod auth;
pub mod cli;
pub mod session;

/// Git commit recorded at build time, `unknown` outside a git checkout.
pub const GIT_COMMIT_HASH: &str = match option_env!("ECOWATCH_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};
