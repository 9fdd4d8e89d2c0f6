//! REST-backed implementation of the shared catalog store.

use portal_host::{
    AppId, CatalogEntry, CatalogStore, CatalogStoreFuture, PageLanguage, WidgetConfig,
    DEFAULT_LOCALE,
};
use serde_json::Value;

use crate::rest;

#[derive(Debug, Clone, Copy, Default)]
/// Catalog store reading the configured applications list.
pub struct RestCatalogStore;

impl RestCatalogStore {
    fn items_url(language: &PageLanguage) -> String {
        let config = WidgetConfig::get();
        let filter = format!(
            "MuiLanguage eq '{}' or MuiLanguage eq '{}'",
            language.dashed(),
            DEFAULT_LOCALE
        );
        format!(
            "{}/_api/web/lists/getbytitle('{}')/items?$select=AppId,Title,Description,LinkUrl,MuiLanguage,SortOrder&$filter={}&$top=500",
            config.site_relative_url(),
            config.catalog_list,
            rest::encode_query(&filter)
        )
    }

    fn parse_entries(payload: &Value) -> Vec<CatalogEntry> {
        payload
            .get("value")
            .and_then(Value::as_array)
            .map(|rows| rows.iter().filter_map(Self::parse_entry).collect())
            .unwrap_or_default()
    }

    /// Rows without an app id are dropped; every other field degrades to a
    /// sensible empty value.
    fn parse_entry(row: &Value) -> Option<CatalogEntry> {
        let id = row.get("AppId").and_then(Value::as_str)?;
        Some(CatalogEntry {
            id: AppId::from(id),
            title: row
                .get("Title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            description: row
                .get("Description")
                .and_then(Value::as_str)
                .map(str::to_string),
            url: row.get("LinkUrl").and_then(Value::as_str).map(str::to_string),
            locale: row
                .get("MuiLanguage")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_LOCALE)
                .to_string(),
            sort_order: row
                .get("SortOrder")
                .and_then(Value::as_i64)
                .map(|order| order as i32),
        })
    }
}

impl CatalogStore for RestCatalogStore {
    fn load_catalog<'a>(
        &'a self,
        language: &'a PageLanguage,
    ) -> CatalogStoreFuture<'a, Result<Vec<CatalogEntry>, String>> {
        Box::pin(async move {
            let url = Self::items_url(language);
            let payload = rest::get_json(&url).await.map_err(|err| err.to_string())?;
            Ok(Self::parse_entries(&payload))
        })
    }
}
