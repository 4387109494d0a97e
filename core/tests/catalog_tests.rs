// tests/catalog_tests.rs
mod common;

use common::*;
use std::sync::Arc;

use chrono::{Duration, Utc};
use storefront::{filter_products, CatalogLoader, MemoryStore, ALL_CATEGORIES};

fn sample_catalog() -> Vec<storefront::Product> {
  vec![
    product("UltraSharp 27", "monitors", "Dell", 1999),
    product("Odyssey G9", "monitors", "Samsung", 129999),
    product("ProArt Display", "monitors", "ASUS", 89999),
    product("Ryzen 9 9950X", "processors", "AMD", 64999),
    product("Core Ultra 9", "processors", "Intel", 58999),
  ]
}

#[test]
fn category_filter_keeps_only_exact_matches_in_original_order() {
  let catalog = sample_catalog();

  let visible = filter_products(&catalog, "monitors", "");

  let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["UltraSharp 27", "Odyssey G9", "ProArt Display"]);
}

#[test]
fn category_matching_is_case_sensitive() {
  let catalog = sample_catalog();
  assert!(filter_products(&catalog, "Monitors", "").is_empty());
}

#[test]
fn query_matches_name_description_or_brand_case_insensitively() {
  let catalog = sample_catalog();

  // Brand hit, folded on both sides.
  let by_brand = filter_products(&catalog, ALL_CATEGORIES, "SAMSUNG");
  assert_eq!(by_brand.len(), 1);
  assert_eq!(by_brand[0].name, "Odyssey G9");

  // Name substring hit.
  let by_name = filter_products(&catalog, ALL_CATEGORIES, "ultra");
  let names: Vec<&str> = by_name.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["UltraSharp 27", "Core Ultra 9"]);

  // Description hit (factory writes "<name> by <brand>").
  let by_description = filter_products(&catalog, ALL_CATEGORIES, "by amd");
  assert_eq!(by_description.len(), 1);
  assert_eq!(by_description[0].name, "Ryzen 9 9950X");
}

#[test]
fn category_and_query_compose_with_and_semantics() {
  let catalog = sample_catalog();

  let visible = filter_products(&catalog, "monitors", "ultra");

  assert_eq!(visible.len(), 1);
  assert_eq!(visible[0].name, "UltraSharp 27");
}

#[test]
fn filtering_is_idempotent() {
  let catalog = sample_catalog();

  let once = filter_products(&catalog, "monitors", "dell");
  let twice = filter_products(&once, "monitors", "dell");

  let once_ids: Vec<_> = once.iter().map(|p| p.id).collect();
  let twice_ids: Vec<_> = twice.iter().map(|p| p.id).collect();
  assert_eq!(once_ids, twice_ids);
}

#[test]
fn all_sentinel_and_empty_query_keep_everything() {
  let catalog = sample_catalog();
  assert_eq!(filter_products(&catalog, ALL_CATEGORIES, "").len(), catalog.len());
}

#[tokio::test]
async fn loader_returns_products_newest_first() {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());

  let mut oldest = product("UltraSharp 27", "monitors", "Dell", 1999);
  let mut middle = product("Ryzen 9 9950X", "processors", "AMD", 64999);
  let mut newest = product("RTX 5090", "graphics-cards", "NVIDIA", 199999);
  let now = Utc::now();
  oldest.created_at = now - Duration::days(2);
  middle.created_at = now - Duration::days(1);
  newest.created_at = now;
  seed_products(store.as_ref(), &[oldest.clone(), newest.clone(), middle.clone()]).await;

  let loader = CatalogLoader::new(store);
  let catalog = loader.fetch_all().await.unwrap();

  let ids: Vec<_> = catalog.iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
}
