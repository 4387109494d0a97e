// storefront/src/cart/mod.rs

//! Cart state ownership and synchronization against the remote store.

pub mod engine;
pub mod shared;
pub mod state;

pub use engine::CartEngine;
pub use shared::Shared;
pub use state::{CartPhase, CartState};
