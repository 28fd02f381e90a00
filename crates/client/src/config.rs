/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for a backend running on the local
/// development address. Override via environment variables (a `.env` file
/// is honored when the binary calls `dotenvy::dotenv()` at startup).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash (default:
    /// `http://localhost:8000`).
    pub api_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `TRIDOCS_API_URL`      | `http://localhost:8000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let api_url = std::env::var("TRIDOCS_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());
        let api_url = api_url.trim_end_matches('/').to_string();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            request_timeout_secs,
        }
    }
}
