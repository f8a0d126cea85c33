use std::env;
use std::fmt;

const DEFAULT_DATABASE_URL: &str = "sqlite://items.db?mode=rwc";
const DEFAULT_API_KEY: &str = "dev-api-key";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Application settings sourced from the environment
///
/// Every value has a development fallback; operators must override
/// DATABASE_URL and API_KEY in any shared deployment.
pub struct Settings {
    database_url: String,
    api_key: String,
    server_host: String,
    server_port: u16,
}

impl Settings {
    /// Load settings from environment variables, falling back to development defaults
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let api_key = env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        let server_host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let server_port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            database_url,
            api_key,
            server_host,
            server_port,
        }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("api_key", &"<redacted>")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
