use anyhow::Result;
use ecowatch::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Login(args) => actions::login::handle(args, &globals).await?,
        Action::Signup(args) => actions::signup::handle(args, &globals).await?,
        Action::Reset(args) => actions::reset::handle(args, &globals).await?,
        Action::Logout => actions::logout::handle(&globals)?,
        Action::Whoami => actions::whoami::handle(&globals).await?,
    }

    Ok(())
}
