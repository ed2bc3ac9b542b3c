pub(crate) mod args;
pub(crate) mod config;
mod console;
pub(crate) mod types;

pub(crate) use config::{
    ensure_secure_addr, handle_config_command, load_config, open_store, resolve_addr, save_config,
};
pub(crate) use console::Console;
#[cfg(test)]
pub(crate) use console::format_notice;
pub(crate) use types::{CliConfig, CommandContext, CredentialBackend};
