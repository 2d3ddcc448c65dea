use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("login")
        .about("Sign in and store the session locally")
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email")
                .env("ECOWATCH_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Account password")
                .env("ECOWATCH_PASSWORD")
                .required(true),
        )
}
