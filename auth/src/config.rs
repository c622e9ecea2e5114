use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Process-wide HS256 signing secret
    pub secret: String,

    /// Identity token lifetime handed to every issue call
    #[serde(default = "default_lifetime_secs")]
    pub lifetime_secs: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Shared secret presented by webhook callers as `Authorization: ApiKey <key>`
    pub key: String,
}

fn default_lifetime_secs() -> i64 {
    3600
}

impl AuthConfig {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, API__KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }

    /// The configured identity token lifetime as a duration.
    pub fn token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.jwt.lifetime_secs)
    }
}

impl ApiConfig {
    /// Webhook callers present the key verbatim; comparison is exact.
    pub fn matches(&self, key: &str) -> bool {
        self.key == key
    }
}
