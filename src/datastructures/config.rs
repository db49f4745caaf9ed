use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/* Immutable configuration object. */
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reads `PROTICKET_API_URL`, falling back to the local backend.
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("PROTICKET_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Config::builder().api_base_url(api_base_url).build()
    }
}

/* Creates the final config object.  */
pub struct ConfigBuilder {
    api_base_url: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ConfigBuilder {
    /// Scheme, host and optional path prefix every endpoint is appended to.
    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn build(self) -> Config {
        Config {
            api_base_url: self.api_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_local_backend() {
        assert_eq!(Config::builder().build().api_base_url, "http://localhost:8000");
    }

    #[test]
    fn from_env_reads_api_url_and_falls_back() {
        env::set_var("PROTICKET_API_URL", "https://tickets.example/api");
        assert_eq!(Config::from_env().api_base_url, "https://tickets.example/api");

        env::remove_var("PROTICKET_API_URL");
        assert_eq!(Config::from_env().api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn builder_overrides_base_url() {
        let config = Config::builder()
            .api_base_url("https://api.proticket.example/v1")
            .build();
        assert_eq!(config.api_base_url, "https://api.proticket.example/v1");
    }
}
