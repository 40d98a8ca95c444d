//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use drive_cache::Cache;
use drive_data::{FetchClient, GraphqlClient};
use drive_gateway::{HttpCardProcessor, HttpIntentEndpoint, RentalGateway};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["drive.toml", ".drive.toml", "drive.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// HTTP client shared by every endpoint. Built from `config.http` when unset.
    fetch: Option<FetchClient>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => match find_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("Using config {}", path.display()));
                    CliConfig::load(&path.to_string_lossy())?
                }
                None => CliConfig::default(),
            },
        }
        .with_env_overrides();

        Ok(Self {
            config,
            output,
            cwd,
            fetch: None,
        })
    }

    /// Context routing every outbound call through `fetch`.
    #[cfg(test)]
    pub(crate) fn with_fetch(config: CliConfig, output: Output, fetch: FetchClient) -> Self {
        Self {
            config,
            output,
            cwd: std::env::temp_dir(),
            fetch: Some(fetch),
        }
    }

    /// Directory holding the session records.
    pub fn storage_dir(&self) -> PathBuf {
        self.config
            .storage
            .dir
            .clone()
            .unwrap_or_else(|| dirs_path().join("drive").join("storage"))
    }

    /// Open the session cache.
    pub fn cache(&self) -> Result<Cache> {
        let dir = self.storage_dir();
        Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open session storage at {}", dir.display()))
    }

    fn fetch(&self) -> Result<FetchClient> {
        if let Some(fetch) = &self.fetch {
            return Ok(fetch.clone());
        }
        FetchClient::reqwest(self.config.http.timeouts()).context("Failed to build HTTP client")
    }

    /// GraphQL gateway reading bearer tokens from `cache`.
    pub fn gateway(&self, cache: Cache) -> Result<RentalGateway> {
        let graphql = GraphqlClient::new(self.fetch()?, self.config.api.graphql_url.clone());
        Ok(RentalGateway::new(graphql, cache))
    }

    pub fn intent_endpoint(&self) -> Result<HttpIntentEndpoint> {
        Ok(HttpIntentEndpoint::new(
            self.fetch()?,
            self.config.api.payment_intent_url(),
        ))
    }

    pub fn card_processor(&self) -> Result<HttpCardProcessor> {
        let key = self
            .config
            .payment
            .publishable_key
            .clone()
            .context("No publishable key configured (set payment.publishable_key or DRIVE_PUBLISHABLE_KEY)")?;
        Ok(HttpCardProcessor::new(
            self.fetch()?,
            self.config.payment.processor_url.clone(),
            key,
        ))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file walking up from `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".drive.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, root.path().join(".drive.toml"));
    }

    #[test]
    fn test_find_config_prefers_drive_toml() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("drive.json"), "{}").unwrap();
        std::fs::write(root.path().join("drive.toml"), "").unwrap();

        let found = find_config(root.path()).unwrap();
        assert_eq!(found, root.path().join("drive.toml"));
    }
}
