use clap::Command;

pub fn command() -> Command {
    Command::new("whoami").about("Show the signed-in account")
}
