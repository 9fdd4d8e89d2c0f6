//! Shared application catalog: models and the read-only store contract.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::identity::PageLanguage;

/// Locale value marking an entry as the tenant-wide default translation.
pub const DEFAULT_LOCALE: &str = "Default";

/// Identity of a catalog application, stable across locales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppId(pub String);

impl AppId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for AppId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One raw catalog row as the store returns it.
///
/// The same `id` may appear once per translated locale; deduplication is the
/// merge layer's job, not the store's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: AppId,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Culture tag (`en-US`) or [`DEFAULT_LOCALE`].
    pub locale: String,
    pub sort_order: Option<i32>,
}

impl CatalogEntry {
    pub fn is_default_locale(&self) -> bool {
        self.locale == DEFAULT_LOCALE
    }
}

/// Object-safe boxed future used by [`CatalogStore`] async methods.
pub type CatalogStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Read-only store for the shared application catalog.
///
/// Implementations return every row whose locale matches the active culture
/// or [`DEFAULT_LOCALE`], unsorted and possibly locale-duplicated.
pub trait CatalogStore {
    fn load_catalog<'a>(
        &'a self,
        language: &'a PageLanguage,
    ) -> CatalogStoreFuture<'a, Result<Vec<CatalogEntry>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op catalog store for unsupported targets and baseline tests.
pub struct NoopCatalogStore;

impl CatalogStore for NoopCatalogStore {
    fn load_catalog<'a>(
        &'a self,
        _language: &'a PageLanguage,
    ) -> CatalogStoreFuture<'a, Result<Vec<CatalogEntry>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory catalog store backed by a fixed entry list.
pub struct MemoryCatalogStore {
    inner: Rc<RefCell<Vec<CatalogEntry>>>,
}

impl MemoryCatalogStore {
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(entries)),
        }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load_catalog<'a>(
        &'a self,
        language: &'a PageLanguage,
    ) -> CatalogStoreFuture<'a, Result<Vec<CatalogEntry>, String>> {
        Box::pin(async move {
            let entries = self
                .inner
                .borrow()
                .iter()
                .filter(|entry| entry.locale == language.dashed() || entry.is_default_locale())
                .cloned()
                .collect();
            Ok(entries)
        })
    }
}
