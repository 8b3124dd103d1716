use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const ENDPOINT_ENV: &str = "USER_CARDS_ENDPOINT";

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    pub endpoint: String,
    pub title: String,
    pub description: String,
    pub heading: String,
    pub theme_color: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            title: "User Cards PWA".to_string(),
            description: "A PWA that displays user cards".to_string(),
            heading: "User Directory".to_string(),
            theme_color: "#1976d2".to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Defaults, with the endpoint taken from `USER_CARDS_ENDPOINT` when it is set and non-empty.
    pub fn from_env() -> Self {
        Self::default().with_endpoint_override(env::var(ENDPOINT_ENV).ok())
    }

    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                self.endpoint = endpoint.to_string();
            }
        }
        self
    }
}
