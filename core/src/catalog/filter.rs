// storefront/src/catalog/filter.rs

use crate::model::Product;

/// Category sentinel meaning "no category predicate".
pub const ALL_CATEGORIES: &str = "all";

/// Derives the visible subset of `products` for a category selection and a
/// free-text query.
///
/// Category matching is exact and case-sensitive; the text query is
/// case-folded and matched as a substring against name, description, and
/// brand. Both predicates compose with AND. Pure inclusion filter: no
/// ranking, input order preserved, idempotent.
pub fn filter_products(products: &[Product], category: &str, query: &str) -> Vec<Product> {
  let query = if query.is_empty() {
    None
  } else {
    Some(query.to_lowercase())
  };

  products
    .iter()
    .filter(|p| category == ALL_CATEGORIES || p.category == category)
    .filter(|p| match &query {
      None => true,
      Some(q) => {
        p.name.to_lowercase().contains(q)
          || p.description.to_lowercase().contains(q)
          || p.brand.to_lowercase().contains(q)
      }
    })
    .cloned()
    .collect()
}
