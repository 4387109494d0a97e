// storefront/src/store/mod.rs

//! The remote data collaborator boundary.
//!
//! The hosted store is an opaque external system offering row-level CRUD
//! with conjunctions of equality predicates, single-column ordering, and a
//! join-like "embed related row" projection. `DataStore` captures exactly
//! that capability surface; anything richer belongs to the backend, not to
//! this client.

pub mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub use memory::MemoryStore;

/// Table names of the persisted schema this client touches.
pub const PRODUCTS: &str = "products";
pub const CART_ITEMS: &str = "cart_items";
pub const ORDERS: &str = "orders";
pub const ORDER_ITEMS: &str = "order_items";

/// A single row as the store hands it out: a JSON object. Typed decoding
/// happens at the caller via [`decode_rows`].
pub type Row = serde_json::Value;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("transport failure talking to table '{table}'. Source: {source}")]
  Transport {
    table: String,
    #[source]
    source: anyhow::Error,
  },

  #[error("store rejected the request for table '{table}': {message}")]
  Validation { table: String, message: String },

  #[error("authorization refused for table '{table}'")]
  Unauthorized { table: String },

  #[error("malformed row from table '{table}'. Source: {source}")]
  Decode {
    table: String,
    #[source]
    source: anyhow::Error,
  },
}

/// An equality predicate on one column. Filters on the same request compose
/// with AND semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
  pub column: String,
  pub value: Row,
}

impl Filter {
  pub fn eq(column: impl Into<String>, value: impl Serialize) -> Self {
    Filter {
      column: column.into(),
      value: serde_json::json!(value),
    }
  }
}

#[derive(Debug, Clone)]
pub struct OrderBy {
  pub column: String,
  pub descending: bool,
}

/// Inline one related row: for each result row, the row of `table` whose
/// `id` equals the result row's `foreign_key` column is attached under
/// `field`.
#[derive(Debug, Clone)]
pub struct Embed {
  pub field: String,
  pub table: String,
  pub foreign_key: String,
}

/// A read request, built fluently:
///
/// ```
/// use storefront::store::{Select, CART_ITEMS, PRODUCTS};
/// # let user_id = uuid::Uuid::new_v4();
/// let select = Select::from(CART_ITEMS)
///   .filter("user_id", user_id)
///   .embed("product", PRODUCTS, "product_id");
/// ```
#[derive(Debug, Clone)]
pub struct Select {
  pub table: String,
  pub filters: Vec<Filter>,
  pub order: Option<OrderBy>,
  pub embed: Option<Embed>,
}

impl Select {
  pub fn from(table: impl Into<String>) -> Self {
    Select {
      table: table.into(),
      filters: Vec::new(),
      order: None,
      embed: None,
    }
  }

  pub fn filter(mut self, column: impl Into<String>, value: impl Serialize) -> Self {
    self.filters.push(Filter::eq(column, value));
    self
  }

  pub fn order_by(mut self, column: impl Into<String>, descending: bool) -> Self {
    self.order = Some(OrderBy {
      column: column.into(),
      descending,
    });
    self
  }

  pub fn embed(
    mut self,
    field: impl Into<String>,
    table: impl Into<String>,
    foreign_key: impl Into<String>,
  ) -> Self {
    self.embed = Some(Embed {
      field: field.into(),
      table: table.into(),
      foreign_key: foreign_key.into(),
    });
    self
  }
}

/// Capability interface of the remote data collaborator. Implementations
/// must treat a delete whose filters match nothing as success.
#[async_trait]
pub trait DataStore: Send + Sync {
  async fn query(&self, select: Select) -> Result<Vec<Row>, StoreError>;

  async fn insert(&self, table: &str, row: Row) -> Result<(), StoreError>;

  async fn update(&self, table: &str, patch: Row, filters: &[Filter]) -> Result<(), StoreError>;

  async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError>;
}

/// Decodes raw rows into typed models, mapping serde failures to
/// [`StoreError::Decode`].
pub fn decode_rows<T: DeserializeOwned>(table: &str, rows: Vec<Row>) -> Result<Vec<T>, StoreError> {
  rows
    .into_iter()
    .map(|row| {
      serde_json::from_value(row).map_err(|e| StoreError::Decode {
        table: table.to_string(),
        source: anyhow::Error::new(e),
      })
    })
    .collect()
}
