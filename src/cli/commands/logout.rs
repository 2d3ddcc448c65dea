use clap::Command;

pub fn command() -> Command {
    Command::new("logout").about("Clear the stored session")
}
