//! Build-time widget configuration.

use std::sync::OnceLock;

/// Immutable widget configuration, built once and shared by reference.
///
/// Values are injected at build time (`PORTAL_DOCK_*` environment
/// variables); every field has a working default so a plain build targets
/// the standard host layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Name of the tenant configuration site holding both lists.
    pub config_site: String,
    /// List holding the shared application catalog.
    pub catalog_list: String,
    /// List holding one pinned-record item per user.
    pub user_apps_list: String,
    /// Page where users manage the catalog, linked from the widget.
    pub manage_apps_page: String,
    /// Selector for the fine-grained header anchor marker.
    pub fine_anchor_selector: String,
    /// Selector for the coarse header container that stabilizes earlier.
    pub coarse_anchor_selector: String,
    /// Selector for the conditionally-rendered collapsible header region.
    pub collapsible_region_selector: String,
    /// Selector for the stable header row the collapsible watch observes.
    pub header_row_selector: String,
}

impl WidgetConfig {
    /// Returns the process-wide configuration, building it on first use.
    pub fn get() -> &'static WidgetConfig {
        static CONFIG: OnceLock<WidgetConfig> = OnceLock::new();
        CONFIG.get_or_init(WidgetConfig::from_build_env)
    }

    fn from_build_env() -> Self {
        Self {
            config_site: option_env!("PORTAL_DOCK_CONFIG_SITE")
                .unwrap_or("portal-config")
                .to_string(),
            catalog_list: option_env!("PORTAL_DOCK_CATALOG_LIST")
                .unwrap_or("Applications")
                .to_string(),
            user_apps_list: option_env!("PORTAL_DOCK_USER_APPS_LIST")
                .unwrap_or("UserApplications")
                .to_string(),
            manage_apps_page: option_env!("PORTAL_DOCK_MANAGE_PAGE")
                .unwrap_or("SitePages/manage-applications.aspx")
                .to_string(),
            fine_anchor_selector: option_env!("PORTAL_DOCK_FINE_ANCHOR")
                .unwrap_or("*[data-automationid=\"SiteHeaderFollowButton\"]")
                .to_string(),
            coarse_anchor_selector: option_env!("PORTAL_DOCK_COARSE_ANCHOR")
                .unwrap_or("*[data-automationid=\"SiteHeader\"]")
                .to_string(),
            collapsible_region_selector: option_env!("PORTAL_DOCK_COLLAPSIBLE_REGION")
                .unwrap_or("div[class^=shyHeader]")
                .to_string(),
            header_row_selector: option_env!("PORTAL_DOCK_HEADER_ROW")
                .unwrap_or("div[class^=headerRow]")
                .to_string(),
        }
    }

    /// Server-relative URL of the configuration site.
    pub fn site_relative_url(&self) -> String {
        format!("/sites/{}", self.config_site)
    }

    /// Server-relative URL of the management page.
    pub fn manage_apps_url(&self) -> String {
        format!("{}/{}", self.site_relative_url(), self.manage_apps_page)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn urls_are_rooted_in_the_config_site() {
        let config = WidgetConfig::from_build_env();
        assert_eq!(
            config.site_relative_url(),
            format!("/sites/{}", config.config_site)
        );
        assert!(config.manage_apps_url().starts_with(&config.site_relative_url()));
    }

    #[test]
    fn get_returns_the_same_instance() {
        let first = WidgetConfig::get();
        let second = WidgetConfig::get();
        assert!(std::ptr::eq(first, second));
    }
}
