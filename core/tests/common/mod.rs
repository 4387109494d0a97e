// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use tracing::Level;
use uuid::Uuid;

use storefront::store::PRODUCTS;
use storefront::{DataStore, Filter, MemoryStore, Product, Row, Select, ShippingAddress, StoreError};

// --- Helper for tracing setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Model factories ---

pub fn product(name: &str, category: &str, brand: &str, price_cents: i64) -> Product {
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: format!("{} by {}", name, brand),
    price_cents,
    category: category.to_string(),
    brand: brand.to_string(),
    image_url: format!("https://img.example.test/{}.jpg", name.to_lowercase().replace(' ', "-")),
    stock: 10,
    specs: HashMap::new(),
    rating: 4.5,
    created_at: Utc::now(),
  }
}

pub fn shipping_address() -> ShippingAddress {
  ShippingAddress {
    name: "Ada Lovelace".to_string(),
    street: "12 Analytical Way".to_string(),
    city: "London".to_string(),
    state: "LDN".to_string(),
    zip: "EC1A".to_string(),
    country: "UK".to_string(),
  }
}

pub async fn seed_products(store: &dyn DataStore, products: &[Product]) {
  for p in products {
    store
      .insert(PRODUCTS, serde_json::json!(p))
      .await
      .expect("seeding products should not fail");
  }
}

// --- Instrumented store wrappers ---

/// Counts remote calls per operation, for asserting properties like
/// "no remote call happened" or "clear issued no read".
pub struct CountingStore<S> {
  pub inner: S,
  queries: AtomicUsize,
  inserts: AtomicUsize,
  updates: AtomicUsize,
  deletes: AtomicUsize,
}

impl<S> CountingStore<S> {
  pub fn new(inner: S) -> Self {
    CountingStore {
      inner,
      queries: AtomicUsize::new(0),
      inserts: AtomicUsize::new(0),
      updates: AtomicUsize::new(0),
      deletes: AtomicUsize::new(0),
    }
  }

  pub fn queries(&self) -> usize {
    self.queries.load(Ordering::SeqCst)
  }

  pub fn total_calls(&self) -> usize {
    self.queries.load(Ordering::SeqCst)
      + self.inserts.load(Ordering::SeqCst)
      + self.updates.load(Ordering::SeqCst)
      + self.deletes.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl<S: DataStore> DataStore for CountingStore<S> {
  async fn query(&self, select: Select) -> Result<Vec<Row>, StoreError> {
    self.queries.fetch_add(1, Ordering::SeqCst);
    self.inner.query(select).await
  }

  async fn insert(&self, table: &str, row: Row) -> Result<(), StoreError> {
    self.inserts.fetch_add(1, Ordering::SeqCst);
    self.inner.insert(table, row).await
  }

  async fn update(&self, table: &str, patch: Row, filters: &[Filter]) -> Result<(), StoreError> {
    self.updates.fetch_add(1, Ordering::SeqCst);
    self.inner.update(table, patch, filters).await
  }

  async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError> {
    self.deletes.fetch_add(1, Ordering::SeqCst);
    self.inner.delete(table, filters).await
  }
}

/// A store whose reads and/or writes can be switched to fail, to exercise
/// the engine's "stale over broken" fallback.
pub struct FlakyStore {
  pub inner: MemoryStore,
  fail_reads: AtomicBool,
  fail_writes: AtomicBool,
}

impl FlakyStore {
  pub fn new(inner: MemoryStore) -> Self {
    FlakyStore {
      inner,
      fail_reads: AtomicBool::new(false),
      fail_writes: AtomicBool::new(false),
    }
  }

  pub fn fail_reads(&self, fail: bool) {
    self.fail_reads.store(fail, Ordering::SeqCst);
  }

  pub fn fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  fn outage(table: &str) -> StoreError {
    StoreError::Transport {
      table: table.to_string(),
      source: anyhow::anyhow!("simulated outage"),
    }
  }
}

#[async_trait]
impl DataStore for FlakyStore {
  async fn query(&self, select: Select) -> Result<Vec<Row>, StoreError> {
    if self.fail_reads.load(Ordering::SeqCst) {
      return Err(Self::outage(&select.table));
    }
    self.inner.query(select).await
  }

  async fn insert(&self, table: &str, row: Row) -> Result<(), StoreError> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(Self::outage(table));
    }
    self.inner.insert(table, row).await
  }

  async fn update(&self, table: &str, patch: Row, filters: &[Filter]) -> Result<(), StoreError> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(Self::outage(table));
    }
    self.inner.update(table, patch, filters).await
  }

  async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(Self::outage(table));
    }
    self.inner.delete(table, filters).await
  }
}
