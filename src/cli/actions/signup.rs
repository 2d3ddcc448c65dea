use crate::account::AccountClient;
use crate::auth::events;
use crate::auth::flow::{FlowState, SignupFlow};
use crate::cli::globals::GlobalArgs;
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct Args {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub dob: String,
    pub address: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Handle the signup action
/// # Errors
/// Returns an error if the draft fails validation, the service rejects
/// the registration, or the service is unreachable.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let client = AccountClient::new(&globals.api_url)?;
    let (events, mut receiver) = events::channel();

    let mut flow = SignupFlow::new(client, events);
    flow.set_first_name(&args.first_name);
    flow.set_last_name(&args.last_name);
    flow.set_email(&args.email);
    flow.set_mobile_number(&args.mobile_number);
    flow.set_dob(&args.dob);
    flow.set_address(&args.address);
    flow.set_password(args.password.expose_secret());
    flow.set_confirm_password(args.confirm_password.expose_secret());
    flow.submit().await;

    if flow.state() != FlowState::Succeeded {
        super::render_events(&mut receiver);
        for (_, message) in flow.errors().iter() {
            eprintln!("{message}");
        }
        for label in flow.password_strength().unmet() {
            eprintln!("  {label}");
        }
        bail!("signup failed");
    }

    // Success toast now, navigation hint once the redirect fires.
    super::render_events(&mut receiver);
    if let Some(redirect) = flow.take_redirect() {
        redirect.join().await;
    }
    super::render_events(&mut receiver);

    Ok(())
}
