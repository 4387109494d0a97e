// storefront_demo/src/config.rs

use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
  #[error("Configuration Error: {0}")]
  Config(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Identity the scripted session signs in as.
  pub shopper_email: String,
  /// Category selection for the browse step ("all" disables it).
  pub category: String,
  /// Free-text search for the browse step (may be empty).
  pub search: String,
  /// Optional path to a products JSON file; the embedded seed is used
  /// when unset.
  pub seed_file: Option<String>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self, DemoError> {
    dotenv().ok(); // Load .env file if present

    let shopper_email =
      env::var("STOREFRONT_DEMO_EMAIL").unwrap_or_else(|_| "shopper@example.com".to_string());
    if !shopper_email.contains('@') {
      return Err(DemoError::Config(format!(
        "STOREFRONT_DEMO_EMAIL '{}' is not an email address",
        shopper_email
      )));
    }

    let category = env::var("STOREFRONT_DEMO_CATEGORY").unwrap_or_else(|_| "all".to_string());
    let search = env::var("STOREFRONT_DEMO_QUERY").unwrap_or_default();
    let seed_file = env::var("STOREFRONT_SEED_FILE").ok();

    tracing::info!("Demo configuration loaded successfully.");
    Ok(Self {
      shopper_email,
      category,
      search,
      seed_file,
    })
  }
}
