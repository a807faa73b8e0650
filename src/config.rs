use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// SQLite connection URL for the credential store
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Upper bound on pooled SQLite connections
    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,

    /// Optional JSON file replacing the built-in catalog
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_url() -> String {
    "sqlite://swipewatch.db?mode=rwc".to_string()
}

fn default_database_max_connections() -> u32 {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.database_url, "sqlite://swipewatch.db?mode=rwc");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("HOST".to_string(), "0.0.0.0".to_string()),
            ("CATALOG_PATH".to_string(), "/etc/swipewatch/catalog.json".to_string()),
        ];
        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(
            config.catalog_path.as_deref(),
            Some("/etc/swipewatch/catalog.json")
        );
    }

    #[test]
    fn test_invalid_port_fails() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        assert!(Config::from_vars(vars).is_err());
    }
}
