/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// Origin suffixes of trusted hosting providers, parsed from
    /// comma-separated `CORS_TRUSTED_SUFFIXES`. Any browser origin ending
    /// in one of these is accepted alongside the exact allow-list.
    pub cors_trusted_suffixes: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                       |
    /// |-------------------------|-------------------------------|
    /// | `HOST`                  | `0.0.0.0`                     |
    /// | `PORT`                  | `5000`                        |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`       |
    /// | `CORS_TRUSTED_SUFFIXES` | `.vercel.app,.netlify.app`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let cors_trusted_suffixes = parse_list(
            &std::env::var("CORS_TRUSTED_SUFFIXES")
                .unwrap_or_else(|_| ".vercel.app,.netlify.app".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            cors_trusted_suffixes,
            request_timeout_secs,
        }
    }

    /// Whether a browser `Origin` value may make cross-origin requests:
    /// either an exact allow-list entry or a trusted-provider suffix.
    ///
    /// Requests without an `Origin` header never reach this check — CORS
    /// does not gate non-browser clients.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.cors_origins.iter().any(|allowed| allowed == origin)
            || self
                .cors_trusted_suffixes
                .iter()
                .any(|suffix| origin.ends_with(suffix.as_str()))
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
