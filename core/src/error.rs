// storefront/src/error.rs

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
  /// A mutation was attempted with no signed-in user. User-actionable:
  /// the presentation layer should prompt for sign-in.
  #[error("no authenticated user; sign in to manage the cart")]
  Unauthenticated,

  /// Any collaborator-level failure (transport, validation, authorization,
  /// row decoding). Non-fatal: the engine keeps showing the previous
  /// snapshot.
  #[error("remote store failure. Source: {source}")]
  Remote {
    #[from]
    source: StoreError,
  },

  /// Checkout initiation on an empty cart.
  #[error("cart is empty; nothing to check out")]
  EmptyCart,
}

pub type EngineResult<T, E = EngineError> = std::result::Result<T, E>;
