// storefront/src/store/memory.rs

//! An in-process [`DataStore`] used by tests, examples, and the demo app.
//!
//! It mimics the hosted store's observable behavior: inserted rows get a
//! generated `id` and `created_at` when the client omits them, filters are
//! equality-only conjunctions, and deletes that match nothing succeed.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{DataStore, Filter, Row, Select, StoreError};

#[derive(Default)]
pub struct MemoryStore {
  tables: RwLock<HashMap<String, Vec<Row>>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of rows currently held by `table`.
  pub fn row_count(&self, table: &str) -> usize {
    self.tables.read().get(table).map_or(0, Vec::len)
  }

  fn matches(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|f| row.get(&f.column) == Some(&f.value))
  }

  // Rows of one table are homogeneous, so cross-type comparisons only occur
  // on absent columns; those sort as equal.
  fn compare(a: &Row, b: &Row) -> Ordering {
    match (a, b) {
      (Row::Number(x), Row::Number(y)) => x
        .as_f64()
        .partial_cmp(&y.as_f64())
        .unwrap_or(Ordering::Equal),
      (Row::String(x), Row::String(y)) => x.cmp(y),
      (Row::Bool(x), Row::Bool(y)) => x.cmp(y),
      _ => Ordering::Equal,
    }
  }
}

#[async_trait]
impl DataStore for MemoryStore {
  async fn query(&self, select: Select) -> Result<Vec<Row>, StoreError> {
    let tables = self.tables.read();
    let mut rows: Vec<Row> = tables
      .get(&select.table)
      .map(|rows| {
        rows
          .iter()
          .filter(|row| Self::matches(row, &select.filters))
          .cloned()
          .collect()
      })
      .unwrap_or_default();

    if let Some(order) = &select.order {
      rows.sort_by(|a, b| {
        let null = Row::Null;
        let av = a.get(&order.column).unwrap_or(&null);
        let bv = b.get(&order.column).unwrap_or(&null);
        let cmp = Self::compare(av, bv);
        if order.descending {
          cmp.reverse()
        } else {
          cmp
        }
      });
    }

    if let Some(embed) = &select.embed {
      let related = tables.get(&embed.table);
      for row in &mut rows {
        let Some(fk) = row.get(&embed.foreign_key).cloned() else {
          continue;
        };
        let hit = related.and_then(|rows| rows.iter().find(|r| r.get("id") == Some(&fk)).cloned());
        if let (Some(object), Some(hit)) = (row.as_object_mut(), hit) {
          object.insert(embed.field.clone(), hit);
        }
      }
    }

    Ok(rows)
  }

  async fn insert(&self, table: &str, row: Row) -> Result<(), StoreError> {
    let mut row = row;
    let Some(object) = row.as_object_mut() else {
      return Err(StoreError::Validation {
        table: table.to_string(),
        message: "inserted rows must be JSON objects".to_string(),
      });
    };
    object
      .entry("id")
      .or_insert_with(|| serde_json::json!(Uuid::new_v4()));
    object
      .entry("created_at")
      .or_insert_with(|| serde_json::json!(Utc::now()));

    self
      .tables
      .write()
      .entry(table.to_string())
      .or_default()
      .push(row);
    Ok(())
  }

  async fn update(&self, table: &str, patch: Row, filters: &[Filter]) -> Result<(), StoreError> {
    let Some(patch) = patch.as_object() else {
      return Err(StoreError::Validation {
        table: table.to_string(),
        message: "update patches must be JSON objects".to_string(),
      });
    };

    let mut tables = self.tables.write();
    if let Some(rows) = tables.get_mut(table) {
      for row in rows.iter_mut().filter(|row| Self::matches(row, filters)) {
        if let Some(object) = row.as_object_mut() {
          for (key, value) in patch {
            object.insert(key.clone(), value.clone());
          }
        }
      }
    }
    Ok(())
  }

  async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError> {
    // Matching nothing is a success: deletes are idempotent.
    let mut tables = self.tables.write();
    if let Some(rows) = tables.get_mut(table) {
      rows.retain(|row| !Self::matches(row, filters));
    }
    Ok(())
  }
}
