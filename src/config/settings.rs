//! Application settings with environment indirection.

use super::env::{EnvSource, ProcessEnv};
use super::error::ConfigError;
use super::value::ConfigValue;
use crate::outcome::{NoValue, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Settings grouped by application, then by key.
///
/// ```toml
/// [billing]
/// currency = "EUR"
/// api_token = { system = "BILLING_TOKEN" }
///
/// [billing.retry]
/// attempts = 3
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    apps: BTreeMap<String, BTreeMap<String, ConfigValue>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), apps = settings.apps.len(), "settings loaded");
        Ok(settings)
    }

    /// Set `app.key` to `value`, returning the updated settings.
    pub fn set(mut self, app: &str, key: &str, value: impl Into<ConfigValue>) -> Self {
        self.apps
            .entry(app.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }

    /// Read `app.key`, resolving an environment marker through the process
    /// environment.
    pub fn get(&self, app: &str, key: &str) -> Outcome<NoValue, ConfigValue> {
        self.get_in_with(&ProcessEnv, app, key, &[])
    }

    /// Read a value nested under `app.key` along `path`.
    pub fn get_in(&self, app: &str, key: &str, path: &[&str]) -> Outcome<NoValue, ConfigValue> {
        self.get_in_with(&ProcessEnv, app, key, path)
    }

    /// Read `app.key` with an explicit environment source.
    pub fn get_with<E: EnvSource>(
        &self,
        env: &E,
        app: &str,
        key: &str,
    ) -> Outcome<NoValue, ConfigValue> {
        self.get_in_with(env, app, key, &[])
    }

    /// Read a nested value with an explicit environment source.
    ///
    /// Fails with `NoValue` when the application, the key, any path segment,
    /// or the referenced environment variable is missing.
    pub fn get_in_with<E: EnvSource>(
        &self,
        env: &E,
        app: &str,
        key: &str,
        path: &[&str],
    ) -> Outcome<NoValue, ConfigValue> {
        let root = Outcome::from_value(self.apps.get(app))
            .and_then(|keys| Outcome::from_value(keys.get(key)));

        path.iter()
            .fold(root, |current, segment| {
                current.and_then(|value| {
                    Outcome::from_value(value.as_table().and_then(|table| table.get(*segment)))
                })
            })
            .and_then(|value| resolve(value.clone(), env))
            .tap_error(|_| tracing::trace!(app, key, ?path, "config value not found"))
    }

    /// Read `app.key` as text.
    pub fn get_text(&self, app: &str, key: &str) -> Outcome<NoValue, String> {
        self.get(app, key)
            .and_then(|value| Outcome::from_value(value.as_str().map(str::to_string)))
    }
}

fn resolve<E: EnvSource>(value: ConfigValue, env: &E) -> Outcome<NoValue, ConfigValue> {
    match value {
        ConfigValue::System(marker) => env.var(&marker.system).map(ConfigValue::Text),
        other => Outcome::ok(other),
    }
}
