use clap::{Arg, Command};

pub fn command() -> Command {
    Command::new("signup")
        .about("Create a new account")
        .arg(
            Arg::new("first-name")
                .long("first-name")
                .help("First name")
                .env("ECOWATCH_FIRST_NAME")
                .required(true),
        )
        .arg(
            Arg::new("last-name")
                .long("last-name")
                .help("Last name")
                .env("ECOWATCH_LAST_NAME")
                .required(true),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email")
                .env("ECOWATCH_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new("mobile-number")
                .long("mobile-number")
                .help("Mobile number")
                .env("ECOWATCH_MOBILE_NUMBER")
                .required(true),
        )
        .arg(
            Arg::new("dob")
                .long("dob")
                .help("Date of birth, example: 1990-05-17")
                .env("ECOWATCH_DOB")
                .required(true),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .help("Postal address")
                .env("ECOWATCH_ADDRESS")
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
        .arg(
            Arg::new("confirm-password")
                .long("confirm-password")
                .help("Retype the account password")
                .env("ECOWATCH_CONFIRM_PASSWORD")
                .required(true),
        )
}
