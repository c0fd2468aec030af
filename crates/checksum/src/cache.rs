//! Process-wide memoization of lookup tables.
//!
//! Tables are keyed by the exact [`CrcParams`] value, so engines configured
//! with the same parameter set attach the same shared allocation, and
//! semantically identical configurations collide intentionally. A table is
//! published into the map only after it is fully built; readers can never
//! observe a partial table.
//!
//! Without the `std` feature there is no global map; each engine builds its
//! own tables, which clones of that engine still share through `Arc`.

use alloc::sync::Arc;

use crate::{
  params::CrcParams,
  tables::{self, ByteTable, WordTable},
};

#[cfg(feature = "std")]
mod global {
  use std::{
    collections::HashMap,
    sync::{Mutex, OnceLock, PoisonError},
  };

  use super::*;

  static BYTEWISE: OnceLock<Mutex<HashMap<CrcParams, Arc<ByteTable>>>> = OnceLock::new();
  static WORDWISE: OnceLock<Mutex<HashMap<CrcParams, Arc<WordTable>>>> = OnceLock::new();

  pub(crate) fn bytewise(params: &CrcParams) -> Arc<ByteTable> {
    let map = BYTEWISE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = map.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = guard.get(params) {
      return Arc::clone(table);
    }
    let table = Arc::new(tables::bytewise_table(params));
    guard.insert(*params, Arc::clone(&table));
    table
  }

  pub(crate) fn wordwise(params: &CrcParams, bytes: &ByteTable) -> Arc<WordTable> {
    let map = WORDWISE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = map.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(table) = guard.get(params) {
      return Arc::clone(table);
    }
    let table = Arc::new(tables::wordwise_table(params, bytes));
    guard.insert(*params, Arc::clone(&table));
    table
  }
}

/// Fetch (or build and publish) the shared slice-by-1 table for `params`.
pub(crate) fn bytewise(params: &CrcParams) -> Arc<ByteTable> {
  #[cfg(feature = "std")]
  {
    global::bytewise(params)
  }
  #[cfg(not(feature = "std"))]
  {
    Arc::new(tables::bytewise_table(params))
  }
}

/// Fetch (or build and publish) the shared slice-by-8 table for `params`.
pub(crate) fn wordwise(params: &CrcParams, bytes: &ByteTable) -> Arc<WordTable> {
  #[cfg(feature = "std")]
  {
    global::wordwise(params, bytes)
  }
  #[cfg(not(feature = "std"))]
  {
    Arc::new(tables::wordwise_table(params, bytes))
  }
}
