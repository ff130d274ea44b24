//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SHOPPING_LIST_*` environment variables and
//! config files, in OrthoConfig's usual precedence. Every key may be left
//! unset: `port` carries an OrthoConfig default and the accessors fill in the
//! rest.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Item, ItemFields};

const DEFAULT_HOST: &str = "0.0.0.0";

/// Which initial contents the item store starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Start with the example shopping list.
    #[default]
    Production,
    /// Start empty so test harnesses can install their own fixtures.
    Test,
}

impl RunMode {
    /// Items the store holds at startup.
    pub fn initial_items(self) -> Vec<Item> {
        match self {
            Self::Production => vec![
                Item::from(ItemFields::new("popsicle", 1.45)),
                Item::from(ItemFields::new("cheerios", 3.4)),
            ],
            Self::Test => Vec::new(),
        }
    }
}

impl FromStr for RunMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(SettingsError::UnknownMode {
                value: s.to_owned(),
            }),
        }
    }
}

/// Invalid setting values detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `mode` was neither `production` nor `test`.
    #[error("unknown run mode `{value}`; expected `production` or `test`")]
    UnknownMode { value: String },
    /// `host` did not parse as an IP address.
    #[error("invalid bind host `{value}`")]
    InvalidHost { value: String },
}

/// Runtime configuration for the shopping-list server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHOPPING_LIST")]
pub struct AppSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// `production` or `test`.
    pub mode: Option<String>,
}

impl AppSettings {
    /// Resolve the socket address, falling back to host `0.0.0.0`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Resolve the run mode, falling back to [`RunMode::Production`].
    pub fn run_mode(&self) -> Result<RunMode, SettingsError> {
        self.mode
            .as_deref()
            .map_or(Ok(RunMode::default()), RunMode::from_str)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("shopping-list")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("SHOPPING_LIST_HOST", None::<String>),
            ("SHOPPING_LIST_PORT", None::<String>),
            ("SHOPPING_LIST_MODE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.run_mode().expect("default mode"), RunMode::Production);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SHOPPING_LIST_HOST", Some("127.0.0.1".to_owned())),
            ("SHOPPING_LIST_PORT", Some("3000".to_owned())),
            ("SHOPPING_LIST_MODE", Some("test".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address"),
            SocketAddr::from(([127, 0, 0, 1], 3000))
        );
        assert_eq!(settings.run_mode().expect("mode"), RunMode::Test);
    }

    #[rstest]
    #[case("TEST", Ok(RunMode::Test))]
    #[case(" production ", Ok(RunMode::Production))]
    #[case("staging", Err(SettingsError::UnknownMode { value: "staging".into() }))]
    fn run_mode_parsing(#[case] raw: &str, #[case] expected: Result<RunMode, SettingsError>) {
        assert_eq!(raw.parse::<RunMode>(), expected);
    }

    #[test]
    fn invalid_host_is_rejected() {
        let settings = AppSettings {
            host: Some("not-an-ip".into()),
            port: 8080,
            mode: None,
        };
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost { .. })
        ));
    }

    #[rstest]
    #[case(RunMode::Production, 2)]
    #[case(RunMode::Test, 0)]
    fn initial_items_follow_mode(#[case] mode: RunMode, #[case] expected: usize) {
        assert_eq!(mode.initial_items().len(), expected);
    }
}
