//! Host-integration contracts for the portal app dock.
//!
//! Everything environment-specific (DOM, REST, timers) lives behind the
//! traits defined here; `portal_host_web` supplies the browser adapters and
//! `dock_runtime` consumes the bundle without knowing about either.

pub mod catalog;
pub mod config;
pub mod identity;
pub mod lifecycle;
pub mod mount;
pub mod services;
pub mod user_apps;

pub use catalog::{
    AppId, CatalogEntry, CatalogStore, CatalogStoreFuture, MemoryCatalogStore, NoopCatalogStore,
    DEFAULT_LOCALE,
};
pub use config::WidgetConfig;
pub use identity::{PageLanguage, UserIdentity};
pub use lifecycle::{HostReady, ImmediateHostReady};
pub use mount::{AnchorProbe, CollapsibleWatch, HeaderWatch, WatchDirective, WatchPhase};
pub use services::HostServices;
pub use user_apps::{
    join_ordered_ids, parse_ordered_ids, MemoryUserAppsStore, NoopUserAppsStore, UserAppRecord,
    UserAppsStore, UserAppsStoreFuture,
};
