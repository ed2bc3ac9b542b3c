use auqmia_client::SessionCoordinator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    #[serde(default)]
    pub credential_backend: CredentialBackend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CredentialBackend {
    /// `~/.auqmia/credentials.json`, readable by the owner only.
    #[default]
    File,
    /// The OS keychain.
    Keyring,
}

pub(crate) struct CommandContext<'a> {
    pub(crate) coordinator: &'a SessionCoordinator,
    pub(crate) addr: &'a str,
    pub(crate) config: &'a CliConfig,
}
