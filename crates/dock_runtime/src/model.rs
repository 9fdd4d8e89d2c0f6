use portal_host::{AppId, CatalogEntry};

/// Settle delay after a pin gesture before the flash flag is cleared.
pub const PIN_SETTLE_MS: u32 = 1500;
/// Settle delay after an unpin gesture; shorter, the row only fades back.
pub const UNPIN_SETTLE_MS: u32 = 900;
/// Trailing-edge debounce applied to search input.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Reserved id of the primary mount container in the host header.
pub const PRIMARY_MOUNT_ID: &str = "portal-app-dock";
/// Reserved id of the secondary container in the collapsible header.
pub const COLLAPSIBLE_MOUNT_ID: &str = "portal-app-dock-collapsed";

/// UI-facing projection of a catalog entry.
///
/// `pinned`/`unpinned` are transient animation flags: set on a gesture,
/// cleared by a settle timer, never persisted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct DockItem {
    pub id: AppId,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub order: Option<i32>,
    pub pinned: bool,
    pub unpinned: bool,
}

impl DockItem {
    pub fn from_entry(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.title,
            description: entry.description,
            url: entry.url,
            order: entry.sort_order,
            pinned: false,
            unpinned: false,
        }
    }

    /// Copy carrying the just-pinned flash flag.
    pub fn with_pin_flash(mut self) -> Self {
        self.pinned = true;
        self.unpinned = false;
        self
    }

    /// Copy carrying the just-unpinned flash flag.
    pub fn with_unpin_flash(mut self) -> Self {
        self.pinned = false;
        self.unpinned = true;
        self
    }

    /// Copy with both flash flags cleared.
    pub fn settled(mut self) -> Self {
        self.pinned = false;
        self.unpinned = false;
        self
    }
}

/// Whole dock state: two disjoint ordered lists plus the search filter.
///
/// Created empty at mount, seeded by the catalog boot, discarded at
/// unmount; it has no persisted representation of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DockState {
    /// The user's pinned apps, in exactly the order last dispatched.
    pub pinned: Vec<DockItem>,
    /// Remaining deduplicated catalog, disjoint from `pinned` by id.
    pub catalog: Vec<DockItem>,
    /// Verbatim search text; filtering happens in the view layer.
    pub search_text: String,
    /// Set once the catalog boot has seeded both lists.
    pub loaded: bool,
}
