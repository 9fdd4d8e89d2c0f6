//! Host service bundle injected into the dock runtime.

use std::rc::Rc;

use crate::{
    catalog::CatalogStore,
    identity::{PageLanguage, UserIdentity},
    user_apps::UserAppsStore,
};

/// Environment-selected services plus the resolved page facts.
///
/// Assembled once by the entry layer; everything below it receives this
/// bundle explicitly instead of reaching for ambient singletons.
#[derive(Clone)]
pub struct HostServices {
    /// Read-only shared catalog.
    pub catalog: Rc<dyn CatalogStore>,
    /// Per-user pinned record store.
    pub user_apps: Rc<dyn UserAppsStore>,
    /// Identity the pinned record is keyed by.
    pub identity: UserIdentity,
    /// Active UI culture of the hosting page.
    pub language: PageLanguage,
}
