// storefront/src/model/product.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable product. Immutable from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  /// Unit price in integer cents, so derived totals stay exact.
  pub price_cents: i64,
  pub category: String,
  pub brand: String,
  pub image_url: String,
  pub stock: i32,
  /// Free-form specification key/value pairs (e.g. "Socket" -> "AM5").
  #[serde(default)]
  pub specs: HashMap<String, String>,
  /// Average review rating, 0.0 to 5.0.
  pub rating: f32,
  pub created_at: DateTime<Utc>,
}
