// storefront/src/model/mod.rs

//! Domain rows as the remote store hands them out. All of these are owned
//! by the remote collaborator; the client treats them as snapshots.

pub mod cart_item;
pub mod order;
pub mod product;

pub use cart_item::CartItem;
pub use order::{Order, OrderItem, ShippingAddress};
pub use product::Product;
