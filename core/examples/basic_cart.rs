// storefront/examples/basic_cart.rs

//! A full cart session against the in-memory store: browse, filter, add,
//! change quantities, check out.

use std::sync::Arc;

use tracing::info;

use storefront::{
  filter_products, CartEngine, CatalogLoader, DataStore, MemorySession, MemoryStore, Product,
  ShippingAddress, ALL_CATEGORIES,
};

fn sample_product(name: &str, category: &str, brand: &str, price_cents: i64) -> Product {
  Product {
    id: uuid::Uuid::new_v4(),
    name: name.to_string(),
    description: format!("{} by {}", name, brand),
    price_cents,
    category: category.to_string(),
    brand: brand.to_string(),
    image_url: format!("https://img.example.test/{}.jpg", name.to_lowercase().replace(' ', "-")),
    stock: 25,
    specs: Default::default(),
    rating: 4.2,
    created_at: chrono::Utc::now(),
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Storefront Basic Cart Example ---");

  // 1. Seed the in-memory collaborator with a small catalog.
  let store = Arc::new(MemoryStore::new());
  let monitor = sample_product("UltraSharp 27", "monitors", "Dell", 1999);
  let gpu = sample_product("RTX 5090", "graphics-cards", "NVIDIA", 199999);
  let keyboard = sample_product("MX Keys", "peripherals", "Logitech", 9999);
  for p in [&monitor, &gpu, &keyboard] {
    store.insert(storefront::store::PRODUCTS, serde_json::json!(p)).await?;
  }

  // 2. Load and filter the catalog the way a storefront page would.
  let loader = CatalogLoader::new(store.clone());
  let catalog = loader.fetch_all().await?;
  info!("catalog holds {} products", catalog.len());

  let monitors = filter_products(&catalog, "monitors", "");
  info!("visible under 'monitors': {:?}", monitors.iter().map(|p| &p.name).collect::<Vec<_>>());
  let searched = filter_products(&catalog, ALL_CATEGORIES, "mx");
  info!("search 'mx' finds: {:?}", searched.iter().map(|p| &p.name).collect::<Vec<_>>());

  // 3. Sign in and work the cart.
  let session = Arc::new(MemorySession::new());
  session.sign_in("shopper@example.com");
  let engine = CartEngine::new(store.clone(), session.clone());
  engine.reload().await?;

  engine.add_to_cart(&monitor).await?;
  engine.add_to_cart(&monitor).await?; // same product: one row, quantity 2
  engine.add_to_cart(&keyboard).await?;
  info!(
    "cart holds {} units across {} rows, total {} cents",
    engine.cart_count(),
    engine.snapshot().entries.len(),
    engine.cart_total()
  );

  let keyboard_row = engine
    .snapshot()
    .entries
    .iter()
    .find(|e| e.product_id == keyboard.id)
    .map(|e| e.id)
    .expect("keyboard was just added");
  engine.update_quantity(keyboard_row, 3).await?;
  info!("after bumping the keyboard to 3: total {} cents", engine.cart_total());

  // 4. Check out.
  let order = engine
    .begin_checkout(ShippingAddress {
      name: "Ada Lovelace".to_string(),
      street: "12 Analytical Way".to_string(),
      city: "London".to_string(),
      state: "LDN".to_string(),
      zip: "EC1A".to_string(),
      country: "UK".to_string(),
    })
    .await?;
  info!("order {} initiated, status '{}', total {} cents", order.id, order.status, order.total_cents);
  assert!(engine.snapshot().entries.is_empty());

  Ok(())
}
