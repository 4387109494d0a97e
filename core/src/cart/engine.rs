// storefront/src/cart/engine.rs

//! The cart synchronization engine.
//!
//! The engine owns the cart snapshot for the active identity and mediates
//! every mutation through the remote store. Consistency comes from one
//! mechanism only: read-your-writes via full reload. Each successful write
//! is followed by a re-fetch that wholly replaces local state, trading a
//! round trip for the impossibility of local/remote divergence.
//!
//! All mutating operations (reload included) are serialized through a
//! single async mutex. Two near-simultaneous `add_to_cart` calls for the
//! same product therefore cannot both observe "not in cart" and insert
//! duplicate rows; the second sees the first's row and increments it.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::model::{CartItem, Order, OrderItem, Product, ShippingAddress};
use crate::session::{Identity, IdentityProvider};
use crate::store::{decode_rows, DataStore, Filter, Select, CART_ITEMS, ORDERS, ORDER_ITEMS, PRODUCTS};

use super::shared::Shared;
use super::state::{CartPhase, CartState};

pub struct CartEngine {
  store: Arc<dyn DataStore>,
  session: Arc<dyn IdentityProvider>,
  state: Shared<CartState>,
  // Serializes reload and every mutation so overlapping user intents
  // cannot interleave their remote round trips.
  mutations: Mutex<()>,
}

impl CartEngine {
  pub fn new(store: Arc<dyn DataStore>, session: Arc<dyn IdentityProvider>) -> Self {
    CartEngine {
      store,
      session,
      state: Shared::default(),
      mutations: Mutex::new(()),
    }
  }

  /// Cloneable handle to the live state, for presentation code that wants
  /// to observe phase and entries without going through the engine.
  pub fn state_handle(&self) -> Shared<CartState> {
    self.state.clone()
  }

  pub fn phase(&self) -> CartPhase {
    self.state.read().phase
  }

  pub fn snapshot(&self) -> CartState {
    self.state.read().clone()
  }

  /// Σ(price × quantity) over the current snapshot. Recomputed on every
  /// read; never cached, so it cannot drift from the entries.
  pub fn cart_total(&self) -> i64 {
    self.state.read().total_cents()
  }

  /// Σ(quantity) over the current snapshot.
  pub fn cart_count(&self) -> i64 {
    self.state.read().count()
  }

  /// Replaces the whole snapshot with a fresh remote read.
  ///
  /// Must be invoked by the wiring layer on every identity change (login
  /// and logout included). With no identity the cart is forced empty;
  /// otherwise the entries are fully replaced, never merged, so a previous
  /// identity's items can never leak across a switch.
  #[instrument(name = "CartEngine::reload", skip_all, err(Display))]
  pub async fn reload(&self) -> EngineResult<()> {
    let _serial = self.mutations.lock().await;
    self.reload_inner().await
  }

  /// Adds one unit of `product` to the cart.
  ///
  /// If the product is already in the cart its quantity is bumped by one;
  /// otherwise a quantity-1 row is inserted. Signals
  /// [`EngineError::Unauthenticated`] without any remote call when no user
  /// is signed in.
  #[instrument(
    name = "CartEngine::add_to_cart",
    skip_all,
    fields(product_id = %product.id),
    err(Display)
  )]
  pub async fn add_to_cart(&self, product: &Product) -> EngineResult<()> {
    let _serial = self.mutations.lock().await;
    let user = self.require_user()?;

    let existing = {
      let state = self.state.read();
      state
        .entries
        .iter()
        .find(|entry| entry.product_id == product.id)
        .map(|entry| (entry.id, entry.quantity))
    };

    match existing {
      Some((cart_item_id, quantity)) => {
        debug!(%cart_item_id, quantity, "product already in cart; incrementing");
        self.set_quantity_inner(cart_item_id, quantity + 1).await
      }
      None => {
        let row = json!({
          "user_id": user.id,
          "product_id": product.id,
          "quantity": 1,
        });
        self.store.insert(CART_ITEMS, row).await?;
        info!(user_id = %user.id, "cart row inserted");
        self.reload_inner().await
      }
    }
  }

  /// Deletes the row by identifier. Removing an id that no longer exists
  /// is a no-op success.
  #[instrument(name = "CartEngine::remove_from_cart", skip_all, fields(%cart_item_id), err(Display))]
  pub async fn remove_from_cart(&self, cart_item_id: Uuid) -> EngineResult<()> {
    let _serial = self.mutations.lock().await;
    self.remove_inner(cart_item_id).await
  }

  /// Sets the row's quantity. A quantity below one deletes the row.
  #[instrument(
    name = "CartEngine::update_quantity",
    skip_all,
    fields(%cart_item_id, quantity),
    err(Display)
  )]
  pub async fn update_quantity(&self, cart_item_id: Uuid, quantity: i32) -> EngineResult<()> {
    let _serial = self.mutations.lock().await;
    self.set_quantity_inner(cart_item_id, quantity).await
  }

  /// Deletes every row owned by the current identity, then sets local
  /// state to empty directly: the post-state is known, so the reload round
  /// trip is skipped.
  #[instrument(name = "CartEngine::clear_cart", skip_all, err(Display))]
  pub async fn clear_cart(&self) -> EngineResult<()> {
    let _serial = self.mutations.lock().await;
    let user = self.require_user()?;

    self
      .store
      .delete(CART_ITEMS, &[Filter::eq("user_id", user.id)])
      .await?;

    let mut state = self.state.write();
    state.entries.clear();
    state.phase = CartPhase::Ready;
    info!(user_id = %user.id, "cart cleared");
    Ok(())
  }

  /// Checkout initiation: persists an order (status "pending") with one
  /// order item per cart entry, capturing unit prices at purchase time,
  /// then empties the cart.
  #[instrument(name = "CartEngine::begin_checkout", skip_all, err(Display))]
  pub async fn begin_checkout(&self, shipping_address: ShippingAddress) -> EngineResult<Order> {
    let _serial = self.mutations.lock().await;
    let user = self.require_user()?;

    let (entries, total_cents) = {
      let state = self.state.read();
      (state.entries.clone(), state.total_cents())
    };
    if entries.is_empty() {
      return Err(EngineError::EmptyCart);
    }

    let now = chrono::Utc::now();
    let order = Order {
      id: Uuid::new_v4(),
      user_id: user.id,
      total_cents,
      status: "pending".to_string(),
      shipping_address,
      created_at: now,
    };
    self.store.insert(ORDERS, json!(order)).await?;

    for entry in &entries {
      let Some(product) = &entry.product else {
        warn!(cart_item_id = %entry.id, "cart row has no product embed; skipped at checkout");
        continue;
      };
      let item = OrderItem {
        id: Uuid::new_v4(),
        order_id: order.id,
        product_id: entry.product_id,
        quantity: entry.quantity,
        price_cents: product.price_cents,
        created_at: now,
      };
      self.store.insert(ORDER_ITEMS, json!(item)).await?;
    }

    self
      .store
      .delete(CART_ITEMS, &[Filter::eq("user_id", user.id)])
      .await?;
    let mut state = self.state.write();
    state.entries.clear();
    state.phase = CartPhase::Ready;
    info!(order_id = %order.id, total_cents, "checkout initiated");
    Ok(order)
  }

  fn require_user(&self) -> EngineResult<Identity> {
    self.session.current_user().ok_or(EngineError::Unauthenticated)
  }

  async fn set_quantity_inner(&self, cart_item_id: Uuid, quantity: i32) -> EngineResult<()> {
    if quantity < 1 {
      // Non-positive quantity means deletion, not an error.
      return self.remove_inner(cart_item_id).await;
    }
    self
      .store
      .update(
        CART_ITEMS,
        json!({ "quantity": quantity }),
        &[Filter::eq("id", cart_item_id)],
      )
      .await?;
    self.reload_inner().await
  }

  async fn remove_inner(&self, cart_item_id: Uuid) -> EngineResult<()> {
    self
      .store
      .delete(CART_ITEMS, &[Filter::eq("id", cart_item_id)])
      .await?;
    self.reload_inner().await
  }

  // Callers must hold the mutation lock.
  async fn reload_inner(&self) -> EngineResult<()> {
    let Some(user) = self.session.current_user() else {
      let mut state = self.state.write();
      state.entries.clear();
      state.owner = None;
      state.phase = CartPhase::Unauthenticated;
      debug!("no identity; cart forced empty");
      return Ok(());
    };

    {
      let mut state = self.state.write();
      if state.owner != Some(user.id) {
        // Identity switch: never show (or fall back to) another
        // identity's rows.
        state.entries.clear();
        state.owner = Some(user.id);
      }
      state.phase = CartPhase::Loading;
    }

    let select = Select::from(CART_ITEMS)
      .filter("user_id", user.id)
      .embed("product", PRODUCTS, "product_id");

    let fetched = match self.store.query(select).await {
      Ok(rows) => decode_rows::<CartItem>(CART_ITEMS, rows),
      Err(e) => Err(e),
    };

    match fetched {
      Ok(entries) => {
        debug!(user_id = %user.id, count = entries.len(), "cart snapshot replaced");
        let mut state = self.state.write();
        state.entries = entries;
        state.phase = CartPhase::Ready;
        Ok(())
      }
      Err(e) => {
        // Stale over broken: keep whatever was displayed before.
        warn!(user_id = %user.id, error = %e, "cart reload failed; keeping previous snapshot");
        self.state.write().phase = CartPhase::Ready;
        Err(EngineError::from(e))
      }
    }
  }
}
