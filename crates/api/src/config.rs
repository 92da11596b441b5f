use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except secrets have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT verification configuration (shared secret with the auth provider).
    pub jwt: JwtConfig,
    /// Chat-completions endpoint URL.
    pub completion_api_url: String,
    /// API key for the completions endpoint.
    pub completion_api_key: String,
    /// Model slug used when a generation request names none.
    pub default_model: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Required | Default                                       |
    /// |--------------------------|----------|-----------------------------------------------|
    /// | `HOST`                   | no       | `0.0.0.0`                                     |
    /// | `PORT`                   | no       | `3000`                                        |
    /// | `CORS_ORIGINS`           | no       | `http://localhost:5173`                       |
    /// | `REQUEST_TIMEOUT_SECS`   | no       | `30`                                          |
    /// | `JWT_SECRET`             | **yes**  | --                                            |
    /// | `COMPLETION_API_URL`     | no       | `https://openrouter.ai/api/v1/chat/completions` |
    /// | `COMPLETION_API_KEY`     | **yes**  | --                                            |
    /// | `DEFAULT_MODEL`          | no       | `openai/gpt-4o-mini`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let completion_api_url = std::env::var("COMPLETION_API_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1/chat/completions".into());

        let completion_api_key =
            std::env::var("COMPLETION_API_KEY").expect("COMPLETION_API_KEY must be set");

        let default_model =
            std::env::var("DEFAULT_MODEL").unwrap_or_else(|_| "openai/gpt-4o-mini".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            completion_api_url,
            completion_api_key,
            default_model,
        }
    }
}
