use clap::{Args, Subcommand};

use super::types::CredentialBackend;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Set the default server address")]
    SetAddr(SetAddrArgs),
    #[command(about = "Choose where session credentials are kept")]
    SetBackend(SetBackendArgs),
    #[command(about = "Print the current configuration")]
    Show,
}

#[derive(Args)]
pub struct SetAddrArgs {
    #[arg(help = "Server base URL")]
    pub addr: String,
}

#[derive(Args)]
pub struct SetBackendArgs {
    #[arg(value_enum)]
    pub backend: CredentialBackend,
}
