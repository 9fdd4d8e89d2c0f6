//! Resolved user identity and page language models.

use serde::{Deserialize, Serialize};

/// Host-resolved identity of the current user.
///
/// Both fields come from the hosting page; the dock never authenticates or
/// resolves users itself. `user_id` keys the per-user pinned record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable user id in the backing store.
    pub user_id: String,
    /// Login name, kept for record creation on first pin.
    pub login_name: String,
}

/// Active UI culture of the hosting page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLanguage {
    tag: String,
}

impl PageLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Fallback culture used when the host page declares none.
    pub fn fallback() -> Self {
        Self::new("en-US")
    }

    /// Culture tag in dashed form (`en-US`), the form catalog entries carry.
    pub fn dashed(&self) -> &str {
        &self.tag
    }

    /// Lowercased culture tag, used for locale-keyed string tables.
    pub fn lowercase(&self) -> String {
        self.tag.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn page_language_accessors() {
        let language = PageLanguage::new("de-DE");
        assert_eq!(language.dashed(), "de-DE");
        assert_eq!(language.lowercase(), "de-de");
    }

    #[test]
    fn fallback_is_dashed_english() {
        assert_eq!(PageLanguage::fallback().dashed(), "en-US");
    }
}
