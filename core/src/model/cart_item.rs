// storefront/src/model/cart_item.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::Product;

/// One (user, product, quantity) association. The engine guarantees at most
/// one row per (user_id, product_id) pair; the store itself does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
  pub id: Uuid,
  pub user_id: Uuid,
  pub product_id: Uuid,
  /// Always positive in persisted rows. A quantity update to zero or below
  /// deletes the row instead.
  pub quantity: i32,
  pub created_at: DateTime<Utc>,
  /// Denormalized product row, attached when the query embeds it.
  #[serde(default)]
  pub product: Option<Product>,
}
