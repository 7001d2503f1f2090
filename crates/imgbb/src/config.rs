/// Default ImgBB API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.imgbb.com";

/// Default upload timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// ImgBB endpoint and credentials.
#[derive(Debug, Clone)]
pub struct ImgbbConfig {
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// API origin without a trailing slash (default: `https://api.imgbb.com`).
    pub base_url: String,
    /// Per-upload timeout in seconds (default: `30`).
    pub timeout_secs: u64,
}

impl ImgbbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Required | Default                 |
    /// |----------------------|----------|-------------------------|
    /// | `IMGBB_API_KEY`      | **yes**  | --                      |
    /// | `IMGBB_BASE_URL`     | no       | `https://api.imgbb.com` |
    /// | `IMGBB_TIMEOUT_SECS` | no       | `30`                    |
    ///
    /// # Panics
    ///
    /// Panics if `IMGBB_API_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("IMGBB_API_KEY").expect("IMGBB_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "IMGBB_API_KEY must not be empty");

        let base_url = std::env::var("IMGBB_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("IMGBB_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("IMGBB_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            timeout_secs,
        }
    }
}
