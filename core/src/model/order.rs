// storefront/src/model/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingAddress {
  pub name: String,
  pub street: String,
  pub city: String,
  pub state: String,
  pub zip: String,
  pub country: String,
}

/// An order as created by checkout initiation. Payment and fulfilment are
/// the backend's business; the client only ever writes status "pending".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  pub total_cents: i64,
  pub status: String,
  pub shipping_address: ShippingAddress,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
  pub id: Uuid,
  pub order_id: Uuid,
  pub product_id: Uuid,
  pub quantity: i32,
  /// Unit price in cents captured at purchase time; later catalog price
  /// changes must not affect past orders.
  pub price_cents: i64,
  pub created_at: DateTime<Utc>,
}
