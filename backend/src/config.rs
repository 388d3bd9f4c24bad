use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::Locale;
use crate::utils::cookie::is_valid_cookie_name;

/// Browsers clamp persistent cookies to 400 days (RFC 6265bis).
pub const MAX_COOKIE_AGE_DAYS: i64 = 400;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub static_config: StaticConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub enabled: bool,
    pub web_root: String,
}

/// Locale routing section (`[locale]` in conf/config.toml)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Locale used when a request carries no valid preference cookie
    pub default_locale: Locale,
    /// Name of the preference cookie read by the gatekeeper and written on switch
    pub cookie_name: String,
    /// Preference lifetime in days (accepts 365, "365d", "52w")
    #[serde(deserialize_with = "deserialize_days_i64")]
    pub cookie_max_age: i64,
    /// Add the `Secure` attribute to the preference cookie
    pub cookie_secure: bool,
    /// Paths starting with any of these never get a locale redirect
    pub excluded_prefixes: Vec<String>,
    /// Paths equal to any of these never get a locale redirect
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from config.toml file (`explicit_path` wins over the search list)
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(explicit_path: Option<&str>) -> Result<Self, anyhow::Error> {
        let config_path = match explicit_path {
            Some(path) => Some(path.to_string()),
            None => Self::find_config_file(),
        };

        let mut config = if let Some(config_path) = config_path {
            tracing::info!("Loading configuration from {}", config_path);
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 8080)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,franchise_site=debug")
    /// - APP_STATIC_ENABLED: Serve static assets (true/false)
    /// - APP_STATIC_WEB_ROOT: Directory holding static assets
    /// - APP_LOCALE_DEFAULT: Fallback locale code ("en" or "ar")
    /// - APP_LOCALE_COOKIE_NAME: Preference cookie name
    /// - APP_LOCALE_COOKIE_MAX_AGE: Preference lifetime (accepts "365d", "52w")
    /// - APP_LOCALE_COOKIE_SECURE: Mark the preference cookie Secure (true/false)
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Ok(port) = std::env::var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(enabled) = std::env::var("APP_STATIC_ENABLED")
            && let Ok(val) = enabled.parse()
        {
            self.static_config.enabled = val;
            tracing::info!("Override static_config.enabled from env: {}", val);
        }

        if let Ok(root) = std::env::var("APP_STATIC_WEB_ROOT") {
            self.static_config.web_root = root;
            tracing::info!(
                "Override static_config.web_root from env: {}",
                self.static_config.web_root
            );
        }

        if let Ok(code) = std::env::var("APP_LOCALE_DEFAULT") {
            match Locale::from_code(&code) {
                Some(locale) => {
                    self.locale.default_locale = locale;
                    tracing::info!("Override locale.default_locale from env: {}", locale);
                },
                None => tracing::warn!(
                    "Invalid APP_LOCALE_DEFAULT '{}' (keep {})",
                    code,
                    self.locale.default_locale
                ),
            }
        }

        if let Ok(name) = std::env::var("APP_LOCALE_COOKIE_NAME") {
            self.locale.cookie_name = name;
            tracing::info!("Override locale.cookie_name from env: {}", self.locale.cookie_name);
        }

        if let Ok(max_age) = std::env::var("APP_LOCALE_COOKIE_MAX_AGE") {
            match parse_days_to_i64(&max_age) {
                Ok(val) => {
                    self.locale.cookie_max_age = val;
                    tracing::info!("Override locale.cookie_max_age from env: {}", val);
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_LOCALE_COOKIE_MAX_AGE '{}': {} (keep {})",
                    max_age,
                    e,
                    self.locale.cookie_max_age
                ),
            }
        }

        if let Ok(secure) = std::env::var("APP_LOCALE_COOKIE_SECURE")
            && let Ok(val) = secure.parse()
        {
            self.locale.cookie_secure = val;
            tracing::info!("Override locale.cookie_secure from env: {}", val);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.static_config.enabled && self.static_config.web_root.is_empty() {
            anyhow::bail!("static_config.web_root cannot be empty when static serving is enabled");
        }

        self.locale.validate()
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl LocaleConfig {
    fn validate(&self) -> Result<(), anyhow::Error> {
        if !is_valid_cookie_name(&self.cookie_name) {
            anyhow::bail!("locale.cookie_name '{}' is not a valid cookie name", self.cookie_name);
        }

        if self.cookie_max_age <= 0 || self.cookie_max_age > MAX_COOKIE_AGE_DAYS {
            anyhow::bail!(
                "locale.cookie_max_age must be between 1 and {} days, got {}",
                MAX_COOKIE_AGE_DAYS,
                self.cookie_max_age
            );
        }

        for entry in self.excluded_prefixes.iter().chain(&self.excluded_paths) {
            if !entry.starts_with('/') {
                anyhow::bail!("locale exclusion '{}' must start with '/'", entry);
            }
        }

        if self.excluded_prefixes.iter().any(|prefix| prefix == "/") {
            anyhow::bail!("locale.excluded_prefixes cannot contain '/' (it would disable routing)");
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,franchise_site=debug".to_string(),
            file: Some("logs/franchise-site.log".to_string()),
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self { enabled: true, web_root: "web".to_string() }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::DEFAULT,
            cookie_name: "NEXT_LOCALE".to_string(),
            cookie_max_age: 365,
            cookie_secure: false,
            excluded_prefixes: vec![
                "/api".to_string(),
                "/_static".to_string(),
                "/_image".to_string(),
                "/swagger-ui".to_string(),
            ],
            excluded_paths: vec!["/favicon.ico".to_string()],
        }
    }
}

// =========================
// Helpers for parsing values
// =========================

fn parse_days_to_i64(input: &str) -> Result<i64, String> {
    // Accept plain numbers (treated as days)
    if let Ok(val) = input.parse::<i64>() {
        return Ok(val);
    }

    let s = input.trim().to_lowercase();
    let (num_str, unit) = s.split_at(s.chars().take_while(|c| c.is_ascii_digit()).count());
    if num_str.is_empty() || unit.is_empty() {
        return Err("missing number or unit".into());
    }
    let n: i64 = num_str.parse().map_err(|_| "invalid number".to_string())?;
    let factor = match unit {
        "d" | "day" | "days" => 1,
        "w" | "week" | "weeks" => 7,
        "y" | "year" | "years" => 365,
        _ => return Err(format!("unsupported unit: {}", unit)),
    };
    n.checked_mul(factor).ok_or_else(|| "number of days is too large".to_string())
}

// Accepts a plain number of days or a human-friendly string
fn deserialize_days_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;
    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number of days or a string like '365d', '52w' or '1y'")
        }
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v)
        }
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            i64::try_from(v).map_err(|_| E::custom("number of days is too large"))
        }
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_days_to_i64(v).map_err(E::custom)
        }
        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_days_to_i64(&v).map_err(E::custom)
        }
    }
    deserializer.deserialize_any(Visitor)
}
