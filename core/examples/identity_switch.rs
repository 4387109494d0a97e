// storefront/examples/identity_switch.rs

//! Shows the engine's state machine across sign-in, sign-out, and a switch
//! to a second user: every identity change fully replaces the snapshot.

use std::sync::Arc;

use tracing::info;

use storefront::{
  CartEngine, CartPhase, DataStore, EngineError, IdentityProvider, MemorySession, MemoryStore,
  Product,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Storefront Identity Switch Example ---");

  let store = Arc::new(MemoryStore::new());
  let monitor = Product {
    id: uuid::Uuid::new_v4(),
    name: "UltraSharp 27".to_string(),
    description: "27-inch 4K monitor".to_string(),
    price_cents: 1999,
    category: "monitors".to_string(),
    brand: "Dell".to_string(),
    image_url: "https://img.example.test/ultrasharp-27.jpg".to_string(),
    stock: 12,
    specs: Default::default(),
    rating: 4.7,
    created_at: chrono::Utc::now(),
  };
  store.insert(storefront::store::PRODUCTS, serde_json::json!(monitor)).await?;

  let session = Arc::new(MemorySession::new());
  let engine = CartEngine::new(store.clone(), session.clone());

  // Signed out: mutations are rejected before any remote call.
  match engine.add_to_cart(&monitor).await {
    Err(EngineError::Unauthenticated) => info!("signed out: add rejected, prompt for sign-in"),
    other => panic!("expected Unauthenticated, got {:?}", other),
  }

  // First user shops.
  session.sign_in("one@example.com");
  engine.reload().await?;
  engine.add_to_cart(&monitor).await?;
  info!("user one cart count: {}", engine.cart_count());

  // Sign-out forces the cart empty.
  session.sign_out();
  engine.reload().await?;
  assert_eq!(engine.phase(), CartPhase::Unauthenticated);
  info!("after sign-out, phase {:?}, count {}", engine.phase(), engine.cart_count());

  // A different user signs in on the same client: their (empty) cart
  // replaces user one's rows, which stay untouched remotely.
  session.sign_in("two@example.com");
  engine.reload().await?;
  assert_eq!(engine.cart_count(), 0);
  info!("user two sees {} items", engine.cart_count());

  Ok(())
}
