//! Locale-keyed UI strings with a declared default table.
//!
//! Lookup is total: an unknown locale falls back to the default table, and
//! the typed key makes a missing entry unrepresentable.

use portal_host::PageLanguage;

/// Every user-facing string the dock renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKey {
    WidgetButtonLabel,
    SearchPlaceholder,
    PinnedSectionTitle,
    CatalogSectionTitle,
    NoAppsPinned,
    NoAppsAvailable,
    NoAppsFound,
    PinScreenReader,
    UnpinScreenReader,
    ManageApps,
}

struct StringTable {
    widget_button_label: &'static str,
    search_placeholder: &'static str,
    pinned_section_title: &'static str,
    catalog_section_title: &'static str,
    no_apps_pinned: &'static str,
    no_apps_available: &'static str,
    no_apps_found: &'static str,
    pin_screen_reader: &'static str,
    unpin_screen_reader: &'static str,
    manage_apps: &'static str,
}

impl StringTable {
    const fn get(&self, key: StringKey) -> &'static str {
        match key {
            StringKey::WidgetButtonLabel => self.widget_button_label,
            StringKey::SearchPlaceholder => self.search_placeholder,
            StringKey::PinnedSectionTitle => self.pinned_section_title,
            StringKey::CatalogSectionTitle => self.catalog_section_title,
            StringKey::NoAppsPinned => self.no_apps_pinned,
            StringKey::NoAppsAvailable => self.no_apps_available,
            StringKey::NoAppsFound => self.no_apps_found,
            StringKey::PinScreenReader => self.pin_screen_reader,
            StringKey::UnpinScreenReader => self.unpin_screen_reader,
            StringKey::ManageApps => self.manage_apps,
        }
    }
}

const DEFAULT_TABLE: StringTable = StringTable {
    widget_button_label: "My applications",
    search_placeholder: "Search applications",
    pinned_section_title: "My applications",
    catalog_section_title: "All applications",
    no_apps_pinned: "You have not pinned any applications yet.",
    no_apps_available: "No applications are available.",
    no_apps_found: "No applications match your search.",
    pin_screen_reader: "Pin application",
    unpin_screen_reader: "Unpin application",
    manage_apps: "Manage applications",
};

const GERMAN_TABLE: StringTable = StringTable {
    widget_button_label: "Meine Applikationen",
    search_placeholder: "Applikationen durchsuchen",
    pinned_section_title: "Meine Applikationen",
    catalog_section_title: "Alle Applikationen",
    no_apps_pinned: "Sie haben noch keine Applikationen angeheftet.",
    no_apps_available: "Keine Applikationen verfügbar.",
    no_apps_found: "Keine Applikationen entsprechen Ihrer Suche.",
    pin_screen_reader: "Applikation anheften",
    unpin_screen_reader: "Applikation lösen",
    manage_apps: "Applikationen verwalten",
};

const FRENCH_TABLE: StringTable = StringTable {
    widget_button_label: "Mes applications",
    search_placeholder: "Rechercher des applications",
    pinned_section_title: "Mes applications",
    catalog_section_title: "Toutes les applications",
    no_apps_pinned: "Vous n'avez encore épinglé aucune application.",
    no_apps_available: "Aucune application disponible.",
    no_apps_found: "Aucune application ne correspond à votre recherche.",
    pin_screen_reader: "Épingler l'application",
    unpin_screen_reader: "Détacher l'application",
    manage_apps: "Gérer les applications",
};

const ITALIAN_TABLE: StringTable = StringTable {
    widget_button_label: "Le mie applicazioni",
    search_placeholder: "Cerca applicazioni",
    pinned_section_title: "Le mie applicazioni",
    catalog_section_title: "Tutte le applicazioni",
    no_apps_pinned: "Non hai ancora aggiunto applicazioni.",
    no_apps_available: "Nessuna applicazione disponibile.",
    no_apps_found: "Nessuna applicazione corrisponde alla ricerca.",
    pin_screen_reader: "Aggiungi applicazione",
    unpin_screen_reader: "Rimuovi applicazione",
    manage_apps: "Gestisci applicazioni",
};

fn table_for(language: &PageLanguage) -> &'static StringTable {
    match language.lowercase().as_str() {
        "de-de" | "de-ch" => &GERMAN_TABLE,
        "fr-fr" | "fr-ch" => &FRENCH_TABLE,
        "it-it" | "it-ch" => &ITALIAN_TABLE,
        _ => &DEFAULT_TABLE,
    }
}

/// Resolves a UI string for the active page language.
pub fn string_for(key: StringKey, language: &PageLanguage) -> &'static str {
    table_for(language).get(key)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn localized_table_wins_for_known_locales() {
        assert_eq!(
            string_for(StringKey::CatalogSectionTitle, &PageLanguage::new("de-CH")),
            "Alle Applikationen"
        );
        assert_eq!(
            string_for(StringKey::ManageApps, &PageLanguage::new("it-IT")),
            "Gestisci applicazioni"
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_the_default_table() {
        assert_eq!(
            string_for(StringKey::SearchPlaceholder, &PageLanguage::new("nb-NO")),
            "Search applications"
        );
    }
}
