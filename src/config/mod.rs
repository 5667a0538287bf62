//! Configuration reader.
//!
//! Values live in [`Settings`], grouped by application and key. A value
//! written as `{ system = "VAR" }` is an indirection marker: reading it
//! returns the environment variable `VAR` instead. Every read returns an
//! [`Outcome`](crate::Outcome) with [`NoValue`](crate::NoValue) for anything
//! missing, so lookups compose with the rest of the algebra.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use waypoint::config::{ConfigValue, Settings};
//! use waypoint::Outcome;
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//! [billing]
//! api_token = { system = "BILLING_TOKEN" }
//! "#,
//! )
//! .unwrap();
//! let env = HashMap::from([("BILLING_TOKEN".to_string(), "s3cret".to_string())]);
//!
//! assert_eq!(
//!     settings.get_with(&env, "billing", "api_token"),
//!     Outcome::ok(ConfigValue::from("s3cret"))
//! );
//! ```

mod env;
mod error;
mod settings;
mod value;

pub use env::{system_var, EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use settings::Settings;
pub use value::{ConfigValue, EnvRef};
