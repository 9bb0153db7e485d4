// src/config.rs
use std::env;
use std::time::Duration;

/// Runtime configuration, read once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub weather_api_url: String,
    pub weather_api_key: String,
    pub ai_api_url: String,
    pub ai_api_key: String,
    /// Absent when either the store URL or its service key is unset.
    pub supabase: Option<SupabaseConfig>,
    pub weather_timeout: Duration,
    /// Generation can be slow in blocking mode.
    pub chat_timeout: Duration,
    /// Covers both the update and the fallback insert.
    pub profile_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            weather_api_url: String::new(),
            weather_api_key: String::new(),
            ai_api_url: String::new(),
            ai_api_key: String::new(),
            supabase: None,
            weather_timeout: Duration::from_secs(15),
            chat_timeout: Duration::from_secs(60),
            profile_timeout: Duration::from_secs(30),
        }
    }
}

/// Connection details for the user-profile store.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_key: String,
}

impl SupabaseConfig {
    /// REST endpoint for a table, e.g. `{url}/rest/v1/user`.
    pub fn table_url(&self, table: &str) -> String {
        join_url(&self.url, &format!("rest/v1/{table}"))
    }
}

impl RelayConfig {
    /// Build the config from process environment variables.
    ///
    /// Defaults: `HOST` is `0.0.0.0`, `PORT` is `8001`, upstream URLs and
    /// keys are empty strings. `WEATHER_TIMEOUT_SECS`, `CHAT_TIMEOUT_SECS`
    /// and `PROFILE_TIMEOUT_SECS` default to 15, 60 and 30.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] but with an injectable key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).unwrap_or_default();
        let secs = |key: &str, fallback: Duration| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(fallback)
        };

        let supabase_url = non_blank(lookup("SUPABASE_URL"));
        let service_key = non_blank(lookup("SUPABASE_SERVICE_KEY"));

        Self {
            host: non_blank(lookup("HOST")).unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            weather_api_url: var("WEATHER_API_URL"),
            weather_api_key: var("WEATHER_API_KEY"),
            ai_api_url: var("AI_API_URL"),
            ai_api_key: var("AI_API_KEY"),
            supabase: match (supabase_url, service_key) {
                (Some(url), Some(service_key)) => Some(SupabaseConfig { url, service_key }),
                _ => None,
            },
            weather_timeout: secs("WEATHER_TIMEOUT_SECS", defaults.weather_timeout),
            chat_timeout: secs("CHAT_TIMEOUT_SECS", defaults.chat_timeout),
            profile_timeout: secs("PROFILE_TIMEOUT_SECS", defaults.profile_timeout),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn weather_url(&self) -> String {
        join_url(&self.weather_api_url, "data/2.5/weather")
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.ai_api_url, "v1/chat-messages")
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Joins a base URL and a relative path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
