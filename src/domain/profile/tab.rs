// SPDX-License-Identifier: MPL-2.0
//! Tab identifiers and the set of known tabs.

use std::fmt;

/// Identifier of the "About Me" tab.
pub const ABOUT: &str = "about";
/// Identifier of the "Experiences" tab.
pub const EXPERIENCES: &str = "experiences";
/// Identifier of the "Recommended" tab.
pub const RECOMMENDED: &str = "recommended";

// =============================================================================
// TabId
// =============================================================================

/// Identifier of a profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    /// Creates an identifier. Whether it is *known* is decided by a [`TabSet`].
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TabId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// TabSet
// =============================================================================

/// Ordered, non-empty set of known tabs with a designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabId>,
    default_index: usize,
}

impl TabSet {
    /// Builds a set from identifiers, dropping duplicates and blanks.
    ///
    /// Returns `None` when nothing usable remains. The first tab is the default.
    #[must_use]
    pub fn new<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tabs: Vec<TabId> = Vec::new();
        for id in ids {
            let id: String = id.into();
            let id = id.trim();
            if id.is_empty() || tabs.iter().any(|tab| tab.as_str() == id) {
                continue;
            }
            tabs.push(TabId::new(id));
        }
        if tabs.is_empty() {
            None
        } else {
            Some(Self {
                tabs,
                default_index: 0,
            })
        }
    }

    /// Makes `id` the default tab. Returns `None` if it is not in the set.
    #[must_use]
    pub fn with_default(mut self, id: &str) -> Option<Self> {
        self.default_index = self.tabs.iter().position(|tab| tab.as_str() == id)?;
        Some(self)
    }

    /// The tab committed when nothing else has been selected.
    #[must_use]
    pub fn default_tab(&self) -> &TabId {
        &self.tabs[self.default_index]
    }

    /// Returns the known tab matching `id`.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&TabId> {
        self.tabs.iter().find(|tab| tab.as_str() == id)
    }

    /// Returns true if `id` names a known tab.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.resolve(id).is_some()
    }

    /// Iterates the tabs in display order.
    pub fn iter(&self) -> impl Iterator<Item = &TabId> {
        self.tabs.iter()
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always false; a set holds at least one tab.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl Default for TabSet {
    /// The profile panel's tabs: about, experiences, recommended.
    fn default() -> Self {
        Self {
            tabs: vec![
                TabId::new(ABOUT),
                TabId::new(EXPERIENCES),
                TabId::new(RECOMMENDED),
            ],
            default_index: 0,
        }
    }
}
