// src/lib.rs

//! Storefront: the client-side core of a product storefront.
//!
//! What lives here:
//!  - Domain models for products, cart rows, and orders.
//!  - `DataStore`, the abstract remote-store collaborator (equality-filter
//!    queries, ordering, related-row embeds, row-level writes), plus an
//!    in-process `MemoryStore` implementation.
//!  - `IdentityProvider`, the abstract session collaborator.
//!  - `CatalogLoader` and the pure `filter_products` visibility filter.
//!  - `CartEngine`, which owns the cart snapshot per identity, serializes
//!    every mutation, and keeps local state consistent with the remote
//!    store by fully reloading after each write.
//!
//! Presentation layers construct a `CartEngine` with injected collaborators
//! and render `CartState` snapshots; there is no global context anywhere.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod model;
pub mod session;
pub mod store;

// --- Re-exports for the public API ---

pub use crate::cart::{CartEngine, CartPhase, CartState, Shared};
pub use crate::catalog::{filter_products, CatalogLoader, ALL_CATEGORIES};
pub use crate::error::{EngineError, EngineResult};
pub use crate::model::{CartItem, Order, OrderItem, Product, ShippingAddress};
pub use crate::session::{Identity, IdentityProvider, MemorySession};
pub use crate::store::{
  DataStore, Embed, Filter, MemoryStore, OrderBy, Row, Select, StoreError,
};
