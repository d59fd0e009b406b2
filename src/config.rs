use anyhow::{anyhow, Result};
use config::Config;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Default free-text geocoding endpoint (Nominatim search)
pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Default IP metadata endpoint (ipinfo.io)
pub const DEFAULT_IPINFO_URL: &str = "https://ipinfo.io";

/// Default base for map links built from resolved coordinates
pub const DEFAULT_MAP_URL: &str = "https://www.openstreetmap.org/";

/// Default run-level timeout budget in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneqConfig {
    /// Optional ipinfo.io access token, appended as `?token=` when present
    pub ipinfo_token: Option<String>,

    /// Geocoding search endpoint
    pub geocode_url: String,

    /// IP metadata endpoint base; the IP and `/json` are appended
    pub ipinfo_url: String,

    /// Map link base used for the `map_url` field
    pub map_url: String,

    /// Timeout budget for the whole enrichment fan-out, in seconds
    pub timeout_secs: u64,

    /// User-Agent sent with every outbound request
    pub user_agent: String,
}

const EMPTY_CONFIG: &str = r#"### phoneq configuration file

### ipinfo.io access token (optional, anonymous lookups are rate limited)
# ipinfo_token = ""

### outbound endpoints
# geocode_url = "https://nominatim.openstreetmap.org/search"
# ipinfo_url = "https://ipinfo.io"
# map_url = "https://www.openstreetmap.org/"

### timeout budget for all enrichment lookups of one run (in seconds)
# timeout_secs = 10
"#;

impl Default for PhoneqConfig {
    fn default() -> Self {
        Self {
            ipinfo_token: None,
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            ipinfo_url: DEFAULT_IPINFO_URL.to_string(),
            map_url: DEFAULT_MAP_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl PhoneqConfig {
    /// Function to create and initialize a new configuration
    pub fn new(path: &Option<String>) -> Result<PhoneqConfig> {
        let mut builder = Config::builder();

        // Add in toml configuration file
        match path {
            Some(p) => {
                let path = Path::new(p.as_str());
                if path.exists() {
                    let path_str = path
                        .to_str()
                        .ok_or_else(|| anyhow!("Could not convert path to string"))?;
                    builder = builder.add_source(config::File::with_name(path_str));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG)
                        .map_err(|e| anyhow!("Unable to create config file: {}", e))?;
                }
            }
            None => {
                // By default use $HOME/.phoneq/phoneq.toml as the configuration file path
                let phoneq_dir = Self::config_dir()?;
                std::fs::create_dir_all(phoneq_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create phoneq directory: {}", e))?;
                let p = format!("{}/phoneq.toml", phoneq_dir.as_str());
                if Path::new(p.as_str()).exists() {
                    builder = builder.add_source(config::File::with_name(p.as_str()));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG).map_err(|e| {
                        anyhow!("Unable to create config file {}: {}", p.as_str(), e)
                    })?;
                }
            }
        }

        // Add in settings from the environment (with a prefix of PHONEQ)
        // E.g., `PHONEQ_IPINFO_TOKEN=abc ./phoneq 8.8.8.8` would set the token
        builder = builder.add_source(config::Environment::with_prefix("PHONEQ"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        Self::from_map(&config)
    }

    /// Build a configuration from already-flattened key/value settings,
    /// falling back to defaults for anything missing.
    pub fn from_map(config: &HashMap<String, String>) -> Result<PhoneqConfig> {
        let defaults = PhoneqConfig::default();

        let ipinfo_token = config
            .get("ipinfo_token")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let timeout_secs = match config.get("timeout_secs") {
            Some(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|e| anyhow!("Invalid timeout_secs '{}': {}", s, e))?,
            None => defaults.timeout_secs,
        };
        if timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }

        let pick = |key: &str, default: String| -> String {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
        };

        Ok(PhoneqConfig {
            ipinfo_token,
            geocode_url: pick("geocode_url", defaults.geocode_url),
            ipinfo_url: pick("ipinfo_url", defaults.ipinfo_url),
            map_url: pick("map_url", defaults.map_url),
            timeout_secs,
            user_agent: pick("user_agent", defaults.user_agent),
        })
    }

    /// Override the access token (e.g. from a command-line flag)
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.ipinfo_token = Some(token.trim().to_string());
        }
        self
    }

    /// Get the run-level timeout budget as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        [
            format!("Geocode URL:        {}", self.geocode_url),
            format!("IPinfo URL:         {}", self.ipinfo_url),
            format!("Map URL:            {}", self.map_url),
            format!("Timeout:            {} seconds", self.timeout_secs),
            format!(
                "IPinfo Token:       {}",
                if self.ipinfo_token.is_some() {
                    "set"
                } else {
                    "not set"
                }
            ),
        ]
        .join("\n")
    }

    fn config_dir() -> Result<String> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .to_str()
            .ok_or_else(|| anyhow!("Could not convert home directory path to string"))?
            .to_owned();
        Ok(format!("{}/.phoneq", home_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PhoneqConfig::default();
        assert_eq!(config.ipinfo_token, None);
        assert_eq!(config.geocode_url, DEFAULT_GEOCODE_URL);
        assert_eq!(config.ipinfo_url, DEFAULT_IPINFO_URL);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("phoneq/"));
    }

    #[test]
    fn test_from_map_overrides() {
        let mut map = HashMap::new();
        map.insert("ipinfo_token".to_string(), " abc123 ".to_string());
        map.insert("timeout_secs".to_string(), "3".to_string());
        map.insert("ipinfo_url".to_string(), "http://127.0.0.1:9".to_string());

        let config = PhoneqConfig::from_map(&map).unwrap();
        assert_eq!(config.ipinfo_token.as_deref(), Some("abc123"));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.ipinfo_url, "http://127.0.0.1:9");
        assert_eq!(config.geocode_url, DEFAULT_GEOCODE_URL);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let mut map = HashMap::new();
        map.insert("ipinfo_token".to_string(), "   ".to_string());
        let config = PhoneqConfig::from_map(&map).unwrap();
        assert_eq!(config.ipinfo_token, None);
    }

    #[test]
    fn test_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("timeout_secs".to_string(), "soon".to_string());
        assert!(PhoneqConfig::from_map(&map).is_err());

        map.insert("timeout_secs".to_string(), "0".to_string());
        assert!(PhoneqConfig::from_map(&map).is_err());
    }

    #[test]
    fn test_with_token() {
        let config = PhoneqConfig::default().with_token(Some("tok".to_string()));
        assert_eq!(config.ipinfo_token.as_deref(), Some("tok"));

        let config = config.with_token(Some("".to_string()));
        assert_eq!(config.ipinfo_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phoneq.toml");
        std::fs::write(&path, "timeout_secs = 4\nmap_url = \"https://maps.example/\"\n").unwrap();

        let config = PhoneqConfig::new(&Some(path.to_string_lossy().to_string())).unwrap();
        assert_eq!(config.timeout_secs, 4);
        assert_eq!(config.map_url, "https://maps.example/");
    }

    #[test]
    fn test_missing_file_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.toml");

        let config = PhoneqConfig::new(&Some(path.to_string_lossy().to_string())).unwrap();
        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("phoneq configuration file"));
        assert_eq!(config.geocode_url, DEFAULT_GEOCODE_URL);
    }
}
