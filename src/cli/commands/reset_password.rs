use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("reset-password")
        .about("Replace the password for an account")
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email")
                .env("ECOWATCH_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new("new-password")
                .long("new-password")
                .help("New account password")
                .env("ECOWATCH_NEW_PASSWORD")
                .required(true),
        )
        .arg(
            Arg::new("confirm-password")
                .long("confirm-password")
                .help("Retype the new password")
                .env("ECOWATCH_CONFIRM_PASSWORD")
                .required(true),
        )
}
