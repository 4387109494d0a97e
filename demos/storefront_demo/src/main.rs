// storefront_demo/src/main.rs

//! A headless storefront session: seeds the in-memory collaborator, loads
//! and filters the catalog, then drives the cart engine through a shopping
//! run ending in checkout initiation. Everything the engine needs is
//! injected here; there are no globals.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

use storefront::store::PRODUCTS;
use storefront::{
  filter_products, CartEngine, CatalogLoader, DataStore, IdentityProvider, MemorySession,
  MemoryStore, Product, ShippingAddress,
};

use crate::config::AppConfig;

const EMBEDDED_SEED: &str = include_str!("../seed/products.json");

async fn seed_store(store: &MemoryStore, config: &AppConfig) -> anyhow::Result<usize> {
  let raw = match &config.seed_file {
    Some(path) => {
      std::fs::read_to_string(path).with_context(|| format!("reading seed file '{}'", path))?
    }
    None => EMBEDDED_SEED.to_string(),
  };
  let products: Vec<Product> = serde_json::from_str(&raw).context("parsing product seed JSON")?;
  let count = products.len();
  for product in &products {
    store
      .insert(PRODUCTS, serde_json::json!(product))
      .await
      .context("seeding product row")?;
  }
  Ok(count)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  info!("Starting storefront demo session...");

  let config = AppConfig::from_env().context("loading demo configuration")?;

  // Collaborators: an in-memory store standing in for the hosted backend,
  // and an in-memory session standing in for the identity provider.
  let store = Arc::new(MemoryStore::new());
  let seeded = seed_store(&store, &config).await?;
  info!(products = seeded, "catalog seeded");

  // Browse: load once, then derive the visible subset.
  let loader = CatalogLoader::new(store.clone());
  let catalog = loader.fetch_all().await?;
  let visible = filter_products(&catalog, &config.category, &config.search);
  info!(
    category = %config.category,
    search = %config.search,
    "{} of {} products visible",
    visible.len(),
    catalog.len()
  );
  for product in &visible {
    info!("  {}: {} cents ({})", product.name, product.price_cents, product.brand);
  }

  // The engine is constructed with its collaborators injected, and handed
  // to the "presentation" below explicitly.
  let session = Arc::new(MemorySession::new());
  let engine = CartEngine::new(store.clone(), session.clone());

  // Mutations while signed out are rejected with an actionable error.
  if let Some(first) = visible.first() {
    if let Err(e) = engine.add_to_cart(first).await {
      warn!("signed-out add rejected as expected: {}", e);
    }
  }

  session.sign_in(config.shopper_email.as_str());
  engine.reload().await?;
  info!(shopper = %config.shopper_email, "signed in");

  // Shop: first visible product twice (one row, quantity two), second once.
  let mut chosen = visible.iter().take(2);
  let Some(first) = chosen.next() else {
    warn!("nothing visible to shop for; relax the filters");
    return Ok(());
  };
  engine.add_to_cart(first).await?;
  engine.add_to_cart(first).await?;
  if let Some(second) = chosen.next() {
    engine.add_to_cart(second).await?;
  }
  info!(
    rows = engine.snapshot().entries.len(),
    units = engine.cart_count(),
    total_cents = engine.cart_total(),
    "cart after shopping"
  );

  // Change our mind about the first product: back down to one unit.
  let first_row = engine
    .snapshot()
    .entries
    .iter()
    .find(|e| e.product_id == first.id)
    .map(|e| e.id);
  if let Some(cart_item_id) = first_row {
    engine.update_quantity(cart_item_id, 1).await?;
    info!(total_cents = engine.cart_total(), "after quantity update");
  }

  // Check out.
  let order = engine
    .begin_checkout(ShippingAddress {
      name: "Demo Shopper".to_string(),
      street: "1 Example Street".to_string(),
      city: "Exampleville".to_string(),
      state: "EX".to_string(),
      zip: "00001".to_string(),
      country: "US".to_string(),
    })
    .await?;
  info!(
    order_id = %order.id,
    status = %order.status,
    total_cents = order.total_cents,
    "checkout initiated"
  );

  session.sign_out();
  engine.reload().await?;
  info!(phase = ?engine.phase(), "signed out; session over");

  Ok(())
}
