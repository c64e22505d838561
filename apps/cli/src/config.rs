use retire_friend_core::{Locale, Theme};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub struct Config {
    pub locale: Locale,
    pub theme: Option<Theme>,
    pub base_url: Url,
}

impl Config {
    /// Reads `RF_*` variables. `.env` is expected to be loaded by the caller.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unusable values fall back
    /// to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = match lookup("RF_LOCALE") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!("{}; falling back to {}", err, Locale::default());
                Locale::default()
            }),
            None => Locale::default(),
        };
        let theme = lookup("RF_THEME")
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    tracing::warn!("{}; using no theme", err);
                    None
                }
            });
        let base_url = lookup("RF_BASE_URL")
            .and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::warn!("Invalid RF_BASE_URL '{}': {}", raw, err);
                    None
                }
            })
            .unwrap_or_else(default_base_url);
        Self {
            locale,
            theme,
            base_url,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.locale, Locale::Th);
        assert_eq!(config.theme, None);
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            ("RF_LOCALE", "en"),
            ("RF_THEME", "Starry Night"),
            ("RF_BASE_URL", "https://retire.example.com"),
        ]);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.theme, Some(Theme::StarryNight));
        assert_eq!(config.base_url.host_str(), Some("retire.example.com"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("RF_LOCALE", "de"),
            ("RF_THEME", "neon"),
            ("RF_BASE_URL", "not a url"),
        ]);
        assert_eq!(config.locale, Locale::Th);
        assert_eq!(config.theme, None);
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
    }
}
