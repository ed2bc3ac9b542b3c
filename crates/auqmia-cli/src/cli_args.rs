use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::animals::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::profile::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "auqmia")]
#[command(about = "AuqMia adoption client")]
pub struct Cli {
    #[arg(long, env = "AUQMIA_ADDR")]
    pub addr: Option<String>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// to remote hosts and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Logout,
    Register(RegisterArgs),
    #[command(about = "Print the logged-in user's profile")]
    Whoami,
    Profile(ProfileArgs),
    Animals(AnimalsArgs),
    #[command(about = "Show the current session")]
    Status,
    Config(ConfigArgs),
}
