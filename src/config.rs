use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base: String,
    pub reset_delay_secs: u64,
    pub github_token: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base)
            .field("reset_delay_secs", &self.reset_delay_secs)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            reset_delay_secs: 3,
            github_token: None,
        }
    }
}

impl Config {
    pub fn load(cli_api_base: Option<String>) -> Self {
        let config_file = config_dir().join("hublook").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("HUBLOOK_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(base) = cli_api_base {
            figment = figment.merge(Serialized::default("api_base", base));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["HUBLOOK_API_BASE", "HUBLOOK_RESET_DELAY_SECS", "GITHUB_TOKEN"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_env_or_file() {
        clear_env();
        std::env::set_var("XDG_CONFIG_HOME", "/nonexistent");
        let config = Config::load(None);
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.reset_delay_secs, 3);
        assert!(config.github_token.is_none());
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        clear_env();
        std::env::set_var("XDG_CONFIG_HOME", "/nonexistent");
        std::env::set_var("HUBLOOK_RESET_DELAY_SECS", "10");
        std::env::set_var("GITHUB_TOKEN", "ghp_test");
        let config = Config::load(None);
        assert_eq!(config.reset_delay_secs, 10);
        assert_eq!(config.github_token.as_deref(), Some("ghp_test"));
        clear_env();
    }

    #[test]
    #[serial]
    fn file_overridden_by_env_and_cli() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("hublook");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "api_base = \"http://file.example\"\nreset_delay_secs = 7\n",
        )
        .unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let config = Config::load(None);
        assert_eq!(config.api_base, "http://file.example");
        assert_eq!(config.reset_delay_secs, 7);

        std::env::set_var("HUBLOOK_API_BASE", "http://env.example");
        let config = Config::load(None);
        assert_eq!(config.api_base, "http://env.example");

        let config = Config::load(Some("http://cli.example".to_string()));
        assert_eq!(config.api_base, "http://cli.example");
        clear_env();
    }

    #[test]
    #[serial]
    fn bad_file_degrades_to_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("hublook");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "reset_delay_secs = \"soon\"\n").unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let config = Config::load(None);
        assert_eq!(config.reset_delay_secs, 3);
        clear_env();
    }

    #[test]
    fn debug_redacts_token() {
        let config = Config {
            github_token: Some("ghp_secret".to_string()),
            ..Config::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
