//! Config Lookup
//!
//! Settings with environment indirection, read through the outcome algebra.
//!
//! Key concepts:
//! - `{ system = "VAR" }` markers resolve to environment variables
//! - Missing values are `NoValue` errors, recovered with defaults
//! - Generated API keys for new credentials
//!
//! Run with: cargo run --example config_lookup

use std::collections::HashMap;
use tracing_subscriber::EnvFilter;
use waypoint::api_key;
use waypoint::config::{ConfigValue, Settings};

const SETTINGS: &str = r#"
[billing]
currency = "EUR"
api_token = { system = "BILLING_TOKEN" }

[billing.retry]
attempts = 3
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Config Lookup Example ===\n");

    let settings = Settings::from_toml_str(SETTINGS).unwrap();
    let env = HashMap::from([("BILLING_TOKEN".to_string(), api_key::generate())]);

    let token = settings
        .get_with(&env, "billing", "api_token")
        .map(|value| value.as_str().map(str::len).unwrap_or_default());
    println!("Token length: {:?}", token.ok_value());

    let attempts = settings
        .get_in("billing", "retry", &["attempts"])
        .map(|value| value.as_i64().unwrap_or(1))
        .with_default(1);
    println!("Retry attempts: {attempts}");

    let region = settings
        .get("billing", "region")
        .with_default(ConfigValue::from("eu-west-1"));
    println!("Region (defaulted): {:?}", region.as_str());

    let unset = settings.get_with(&HashMap::<String, String>::new(), "billing", "api_token");
    println!("Token without environment: {:?}", unset.error_value());

    println!("\n=== Example Complete ===");
}
