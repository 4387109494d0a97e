// storefront/src/catalog/loader.rs

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::EngineResult;
use crate::model::Product;
use crate::store::{decode_rows, DataStore, Select, PRODUCTS};

/// Fetches the full catalog, newest first. The result is the input every
/// visibility filter derives from.
pub struct CatalogLoader {
  store: Arc<dyn DataStore>,
}

impl CatalogLoader {
  pub fn new(store: Arc<dyn DataStore>) -> Self {
    CatalogLoader { store }
  }

  #[instrument(name = "CatalogLoader::fetch_all", skip_all, err(Display))]
  pub async fn fetch_all(&self) -> EngineResult<Vec<Product>> {
    let select = Select::from(PRODUCTS).order_by("created_at", true);
    let rows = self.store.query(select).await?;
    let products = decode_rows::<Product>(PRODUCTS, rows)?;
    debug!(count = products.len(), "catalog loaded");
    Ok(products)
  }
}
