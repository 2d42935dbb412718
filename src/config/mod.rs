use std::env;
use std::str::FromStr;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Page size for widgets that do not set their own.
    pub widget_per_page: u64,
    /// Upper bound for any widget page size.
    pub widget_max_per_page: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            widget_per_page: 10,
            widget_max_per_page: 100,
        }
    }
}

impl AppConfig {
    /// Every variable is optional; missing or unparseable values use the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("BACKEND_HOST").unwrap_or(defaults.host),
            port: parse_var("BACKEND_PORT", defaults.port),
            widget_per_page: parse_var("WIDGET_PER_PAGE", defaults.widget_per_page),
            widget_max_per_page: parse_var("WIDGET_MAX_PER_PAGE", defaults.widget_max_per_page),
        }
    }

    /// Clamp a requested page size into `[1, widget_max_per_page]`.
    pub fn clamp_per_page(&self, per_page: u64) -> u64 {
        per_page.clamp(1, self.widget_max_per_page.max(1))
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
