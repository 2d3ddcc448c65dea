use crate::cli::actions::{login, reset, signup, Action};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

fn string_arg(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

// Passwords leave ArgMatches redacted, only the flows expose them.
fn secret_arg(matches: &ArgMatches, name: &str) -> Result<SecretString> {
    string_arg(matches, name).map(SecretString::from)
}

pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("login", sub_m)) => Ok(Action::Login(login::Args {
            email: string_arg(sub_m, "email")?,
            password: secret_arg(sub_m, "password")?,
        })),
        Some(("signup", sub_m)) => Ok(Action::Signup(signup::Args {
            first_name: string_arg(sub_m, "first-name")?,
            last_name: string_arg(sub_m, "last-name")?,
            email: string_arg(sub_m, "email")?,
            mobile_number: string_arg(sub_m, "mobile-number")?,
            dob: string_arg(sub_m, "dob")?,
            address: string_arg(sub_m, "address")?,
            password: secret_arg(sub_m, "password")?,
            confirm_password: secret_arg(sub_m, "confirm-password")?,
        })),
        Some(("reset-password", sub_m)) => Ok(Action::Reset(reset::Args {
            email: string_arg(sub_m, "email")?,
            new_password: secret_arg(sub_m, "new-password")?,
            confirm_password: secret_arg(sub_m, "confirm-password")?,
        })),
        Some(("logout", _)) => Ok(Action::Logout),
        Some(("whoami", _)) => Ok(Action::Whoami),
        _ => Err(anyhow!("no subcommand provided")),
    }
}
