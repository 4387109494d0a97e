// storefront/src/cart/state.rs

//! The engine's observable state: a phase plus the current cart snapshot.

use uuid::Uuid;

use crate::model::CartItem;

/// Where the engine currently stands for the active identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPhase {
  /// No signed-in user. The cart is defined to be empty and mutations are
  /// rejected.
  Unauthenticated,
  /// A fetch is in flight; the previous (stale) snapshot stays visible.
  Loading,
  /// The snapshot is consistent with the last successful remote read.
  Ready,
}

/// The cart snapshot. A cache of remote rows, wholly replaced by every
/// reload; there is no error phase, failures fall back to the previous
/// entries.
#[derive(Debug, Clone)]
pub struct CartState {
  pub phase: CartPhase,
  pub entries: Vec<CartItem>,
  /// Identity the entries belong to. On an identity switch the entries are
  /// dropped before the fetch, so a failed reload can only ever fall back
  /// to the same identity's rows or to empty.
  pub owner: Option<Uuid>,
}

impl Default for CartState {
  fn default() -> Self {
    CartState {
      phase: CartPhase::Unauthenticated,
      entries: Vec::new(),
      owner: None,
    }
  }
}

impl CartState {
  /// Sum of price × quantity over entries whose product embed is present.
  pub fn total_cents(&self) -> i64 {
    self
      .entries
      .iter()
      .filter_map(|entry| {
        entry
          .product
          .as_ref()
          .map(|p| p.price_cents * i64::from(entry.quantity))
      })
      .sum()
  }

  /// Sum of quantities across all entries.
  pub fn count(&self) -> i64 {
    self.entries.iter().map(|e| i64::from(e.quantity)).sum()
  }
}
