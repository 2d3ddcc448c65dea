use crate::cli::globals::GlobalArgs;
use crate::session::{FileStore, Session};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Handle the logout action
pub fn handle(globals: &GlobalArgs) -> Result<()> {
    let session = Session::new(Arc::new(FileStore::open(&globals.session_file)));
    session.clear_session();

    info!(path = %globals.session_file.display(), "session cleared");
    println!("Signed out.");

    Ok(())
}
