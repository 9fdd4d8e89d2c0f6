//! Browser adapters for the portal app dock.
//!
//! Implements the `portal_host` contracts against the real host page: REST
//! list stores, MutationObserver-driven anchor acquisition, page-context
//! resolution, and timer plumbing. Everything here degrades to inert
//! no-ops off-wasm so the workspace builds and tests natively.

pub mod catalog_items;
pub mod lifecycle;
pub mod mount_driver;
pub mod page_context;
pub mod rest;
pub mod timers;
pub mod user_record;

pub use catalog_items::RestCatalogStore;
pub use lifecycle::WebHostReady;
pub use mount_driver::{
    ensure_mount_container, watch_collapsible_header, watch_header, ContainerPlacement,
};
pub use page_context::{resolve_page_language, resolve_user_identity};
pub use timers::{after, Debouncer};
pub use user_record::RestUserAppsStore;
