use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use auqmia_keystore::{default_root, default_store, CredentialStore, KeyringCredentialStore};
use reqwest::Url;

use super::types::{CliConfig, CredentialBackend};
use crate::cli_args::{ConfigArgs, ConfigCommand};
use crate::DEFAULT_ADDR;

const CONFIG_FILE: &str = "config.json";

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::SetAddr(args) => {
            let addr = normalize_addr(&args.addr);
            Url::parse(&addr).map_err(|err| anyhow::anyhow!("invalid address {addr}: {err}"))?;
            config.addr = Some(addr);
        }
        ConfigCommand::SetBackend(args) => {
            config.credential_backend = args.backend;
        }
        ConfigCommand::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }
    Ok(())
}

fn config_path() -> anyhow::Result<PathBuf> {
    Ok(default_root()?.join(CONFIG_FILE))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    load_config_from(&config_path()?)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    save_config_to(&config_path()?, config)
}

pub(crate) fn load_config_from(path: &Path) -> anyhow::Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config_to(path: &Path, config: &CliConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub(crate) fn resolve_addr(addr_arg: Option<String>, config: &CliConfig) -> String {
    let addr = addr_arg
        .or_else(|| config.addr.clone())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());
    normalize_addr(&addr)
}

pub(crate) fn normalize_addr(addr: &str) -> String {
    addr.trim().trim_end_matches('/').to_string()
}

/// Plain http is fine for a server on this machine; anything else needs
/// `--insecure`.
pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    let url = Url::parse(addr).map_err(|err| anyhow::anyhow!("invalid address {addr}: {err}"))?;
    match url.scheme() {
        "https" => Ok(()),
        "http" if allow_insecure || is_loopback(&url) => Ok(()),
        "http" => anyhow::bail!("refusing to use http:// for a remote host without --insecure"),
        scheme => anyhow::bail!("unsupported scheme: {scheme}"),
    }
}

fn is_loopback(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map(|ip| ip.is_loopback())
        .unwrap_or(false)
}

pub(crate) fn open_store(config: &CliConfig) -> anyhow::Result<Arc<dyn CredentialStore>> {
    match config.credential_backend {
        CredentialBackend::File => Ok(default_store(&default_root()?)),
        CredentialBackend::Keyring => Ok(Arc::new(KeyringCredentialStore::default())),
    }
}
