use std::io::{self, Write};
use std::sync::Arc;

use auqmia_client::{Gateway, SessionCoordinator, SessionDeps};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, open_store, resolve_addr,
    save_config, CommandContext, Console,
};

pub(crate) const DEFAULT_ADDR: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut config = load_config()?;

    let command = match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
            return Ok(());
        }
        command => command,
    };

    let addr = resolve_addr(cli.addr, &config);
    ensure_secure_addr(&addr, cli.insecure)?;
    let client = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .build()?;

    let console = Arc::new(Console);
    let coordinator = SessionCoordinator::start(SessionDeps {
        gateway: Gateway::new(client, &addr),
        store: open_store(&config)?,
        navigator: console.clone(),
        notifier: console,
    })
    .await;

    let ctx = CommandContext {
        coordinator: &coordinator,
        addr: &addr,
        config: &config,
    };
    handle_command(command, &ctx).await
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
