use crate::account::AccountClient;
use crate::auth::events;
use crate::auth::flow::{FlowState, ResetFlow};
use crate::auth::validate::PASSWORDS_MISMATCH;
use crate::cli::globals::GlobalArgs;
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct Args {
    pub email: String,
    pub new_password: SecretString,
    pub confirm_password: SecretString,
}

/// Handle the reset-password action
/// # Errors
/// Returns an error if the draft fails validation, the service rejects
/// the reset, or the service is unreachable.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let client = AccountClient::new(&globals.api_url)?;
    let (events, mut receiver) = events::channel();

    let mut flow = ResetFlow::new(client, events);
    flow.set_email(&args.email);
    flow.set_new_password(args.new_password.expose_secret());
    flow.set_confirm_password(args.confirm_password.expose_secret());
    flow.submit().await;

    if flow.state() != FlowState::Succeeded {
        super::render_events(&mut receiver);
        for label in flow.password_strength().unmet() {
            eprintln!("  {label}");
        }
        if flow.match_indicator() == Some(false) {
            eprintln!("  {PASSWORDS_MISMATCH}");
        }
        bail!("password reset failed");
    }

    super::render_events(&mut receiver);
    Ok(())
}
