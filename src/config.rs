// config.rs
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

/// How the form turns numeric text (area, bedrooms, bathrooms, price) into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericParsePolicy {
    /// Unparsable numbers block the save with a field error.
    #[default]
    Reject,
    /// Leading digits are taken; anything else is stored as empty.
    Lenient,
}

impl FromStr for NumericParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(NumericParsePolicy::Reject),
            "lenient" => Ok(NumericParsePolicy::Lenient),
            other => Err(format!("unknown numeric parse policy '{}'", other)),
        }
    }
}

/// What a settings submission does with the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsMode {
    /// Acknowledge and drop.
    #[default]
    Acknowledge,
    /// Keep in memory for the rest of the session.
    Retain,
}

impl FromStr for SettingsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acknowledge" => Ok(SettingsMode::Acknowledge),
            "retain" => Ok(SettingsMode::Retain),
            other => Err(format!("unknown settings mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub log_level: LevelFilter,
    pub seed_sample_data: bool,
    pub max_image_size_mb: Option<usize>,
    pub numeric_parse_policy: NumericParsePolicy,
    pub clear_residential_on_type_change: bool,
    pub settings_mode: SettingsMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            allowed_origins: vec!["http://localhost:5173".to_string()],
            log_level: LevelFilter::DEBUG,
            seed_sample_data: true,
            max_image_size_mb: None,
            numeric_parse_policy: NumericParsePolicy::Reject,
            clear_residential_on_type_change: false,
            settings_mode: SettingsMode::Acknowledge,
        }
    }
}

impl Config {
    pub fn init() -> Config {
        let defaults = Config::default();

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or(defaults.allowed_origins);

        let max_image_size_mb = std::env::var("MAX_IMAGE_SIZE_MB")
            .ok()
            .and_then(|value| parse_or_warn::<usize>("MAX_IMAGE_SIZE_MB", &value));

        Config {
            port: env_or("PORT", defaults.port),
            allowed_origins,
            log_level: env_or("LOG_LEVEL", defaults.log_level),
            seed_sample_data: env_or("SEED_SAMPLE_DATA", defaults.seed_sample_data),
            max_image_size_mb,
            numeric_parse_policy: env_or("NUMERIC_PARSE_POLICY", defaults.numeric_parse_policy),
            clear_residential_on_type_change: env_or(
                "CLEAR_RESIDENTIAL_ON_TYPE_CHANGE",
                defaults.clear_residential_on_type_change,
            ),
            settings_mode: env_or("SETTINGS_MODE", defaults.settings_mode),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| parse_or_warn(key, &value))
        .unwrap_or(default)
}

// Runs before the subscriber is installed, so warnings go to stderr.
fn parse_or_warn<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            eprintln!("⚠️  Ignoring invalid {}='{}', using default", key, value);
            None
        }
    }
}
