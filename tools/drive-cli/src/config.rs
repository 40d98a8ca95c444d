//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use drive_commerce::admin::{AdminPolicy, DEFAULT_PLACEHOLDER_PASSWORD};
use drive_data::TimeoutConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Rental API and storefront endpoints.
    #[serde(default)]
    pub api: ApiConfig,

    /// Card processor.
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Outbound HTTP limits.
    #[serde(default)]
    pub http: HttpConfig,

    /// Local session storage.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Admin dashboard defaults.
    #[serde(default)]
    pub admin: AdminConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply `DRIVE_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("DRIVE_GRAPHQL_URL").filter(|v| !v.is_empty()) {
            self.api.graphql_url = url;
        }
        if let Some(key) = lookup("DRIVE_PUBLISHABLE_KEY").filter(|v| !v.is_empty()) {
            self.payment.publishable_key = Some(key);
        }
        self
    }
}

/// Endpoints of the rental backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Origin serving the payment-intent route.
    #[serde(default = "default_storefront_origin")]
    pub storefront_origin: String,

    #[serde(default = "default_payment_intent_path")]
    pub payment_intent_path: String,
}

fn default_graphql_url() -> String {
    "http://localhost:8000/graphql".to_string()
}

fn default_storefront_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_payment_intent_path() -> String {
    "/api/create-payment-intent".to_string()
}

impl ApiConfig {
    pub fn payment_intent_url(&self) -> String {
        format!(
            "{}/{}",
            self.storefront_origin.trim_end_matches('/'),
            self.payment_intent_path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graphql_url: default_graphql_url(),
            storefront_origin: default_storefront_origin(),
            payment_intent_path: default_payment_intent_path(),
        }
    }
}

/// Card processor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    #[serde(default = "default_processor_url")]
    pub processor_url: String,

    /// Publishable (client-side) key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,
}

fn default_processor_url() -> String {
    "https://api.stripe.com".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            processor_url: default_processor_url(),
            publishable_key: None,
        }
    }
}

/// HTTP timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl HttpConfig {
    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::from_secs(self.connect_timeout_secs, self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Session storage location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for session records (default: `$HOME/.local/share/drive/storage`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Admin dashboard defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Password given to users created from the dashboard. Empty disables it.
    #[serde(default = "default_placeholder_password")]
    pub placeholder_password: String,
}

fn default_placeholder_password() -> String {
    DEFAULT_PLACEHOLDER_PASSWORD.to_string()
}

impl AdminConfig {
    pub fn policy(&self) -> AdminPolicy {
        AdminPolicy::new(Some(self.placeholder_password.clone()))
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            placeholder_password: default_placeholder_password(),
        }
    }
}

/// Generate a default drive.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# DriveDesk CLI configuration

[api]
graphql_url = "{graphql}"
storefront_origin = "{origin}"
payment_intent_path = "{intent}"

[payment]
processor_url = "{processor}"
# publishable_key = "pk_test_..."

[http]
timeout_secs = {timeout}
connect_timeout_secs = {connect}

[storage]
# dir = "/var/lib/drive"

[admin]
# Users created from the dashboard get this password. Set to "" to require one.
placeholder_password = "{placeholder}"
"#,
        graphql = default_graphql_url(),
        origin = default_storefront_origin(),
        intent = default_payment_intent_path(),
        processor = default_processor_url(),
        timeout = default_timeout_secs(),
        connect = default_connect_timeout_secs(),
        placeholder = DEFAULT_PLACEHOLDER_PASSWORD,
    )
}
