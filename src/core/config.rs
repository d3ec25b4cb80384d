// Build-time configuration. A CSR bundle has no process environment once it
// runs in the browser, so values are baked in by `option_env!` at compile time.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7689/api";
pub const CREDENTIAL_STORAGE_KEY: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    /// The server origin gets `/api` appended, matching how the backend mounts its routers.
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(origin) => format!("{}/api", origin.trim_end_matches('/')),
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let log_level = log_level
            .and_then(|level| level.trim().parse::<log::Level>().ok())
            .unwrap_or(log::Level::Info);

        Self { api_base_url, log_level }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "http://localhost:7689/api");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn origin_gets_api_suffix_and_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://todo.example.com/"), None);
        assert_eq!(config.api_base_url, "https://todo.example.com/api");
        assert_eq!(config.endpoint("/todos"), "https://todo.example.com/api/todos");
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = AppConfig::from_values(Some("   "), None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!(AppConfig::from_values(None, Some("DEBUG")).log_level, log::Level::Debug);
        assert_eq!(AppConfig::from_values(None, Some("loud")).log_level, log::Level::Info);
    }
}
