use crate::account::AccountClient;
use crate::auth::events;
use crate::auth::flow::{FlowState, LoginFlow};
use crate::cli::globals::GlobalArgs;
use crate::session::{FileStore, Session};
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub email: String,
    pub password: SecretString,
}

/// Handle the login action
/// # Errors
/// Returns an error if the credentials are rejected or the service is
/// unreachable.
pub async fn handle(args: Args, globals: &GlobalArgs) -> Result<()> {
    let client = AccountClient::new(&globals.api_url)?;
    let session = Session::new(Arc::new(FileStore::open(&globals.session_file)));
    let (events, mut receiver) = events::channel();

    let mut flow = LoginFlow::new(client, session, events);
    flow.set_email(&args.email);
    flow.set_password(args.password.expose_secret());
    flow.submit().await;

    let state = flow.state();
    super::render_events(&mut receiver);

    if state != FlowState::Succeeded {
        bail!("login failed");
    }

    debug!(path = %globals.session_file.display(), "session saved");
    Ok(())
}
