use crate::account::AccountClient;
use crate::cli::globals::GlobalArgs;
use crate::session::{FileStore, Session};
use anyhow::Result;
use std::sync::Arc;

/// Handle the whoami action
/// # Errors
/// Returns an error if the account client cannot be built.
pub async fn handle(globals: &GlobalArgs) -> Result<()> {
    let session = Session::new(Arc::new(FileStore::open(&globals.session_file)));

    let Some(email) = session.email() else {
        println!("Not signed in.");
        return Ok(());
    };

    // Best effort: the lookup may fail, the email alone is still shown.
    let client = AccountClient::new(&globals.api_url)?;
    if let Some(prefetch) = session.refresh_display_name(&client) {
        prefetch.join().await;
    }

    let name = session
        .display_name()
        .unwrap_or_else(|| "User".to_string());
    println!("{name} <{email}>");

    Ok(())
}
