// SPDX-License-Identifier: MPL-2.0
//! Gallery item identity and source handles.

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// ItemId
// =============================================================================

/// Opaque, process-unique identifier of a gallery item.
///
/// Identifiers are never reused, even across independent stores, so a
/// removed item can never be confused with a later upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocates a fresh identifier.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("item-").unwrap_or(s);
        raw.parse().map(Self)
    }
}

// =============================================================================
// SourceRef
// =============================================================================

/// Handle to the image behind a gallery item.
///
/// The core never opens, decodes or validates the source; it only carries
/// it from the file-chosen event to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// Remote or object URL.
    Url(String),
    /// Local file chosen through the native picker.
    Path(PathBuf),
    /// In-memory bytes handed over by the picker.
    Bytes(Arc<[u8]>),
}

impl SourceRef {
    /// Interprets free-form input as a URL when it has a scheme, else a path.
    #[must_use]
    pub fn guess(input: &str) -> Self {
        if input.contains("://") || input.starts_with("blob:") || input.starts_with("data:") {
            SourceRef::Url(input.to_string())
        } else {
            SourceRef::Path(PathBuf::from(input))
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::Url(url) => write!(f, "{url}"),
            SourceRef::Path(path) => write!(f, "{}", path.display()),
            SourceRef::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

// =============================================================================
// GalleryItem
// =============================================================================

/// An uploaded image. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    id: ItemId,
    source: SourceRef,
    insertion_seq: u64,
}

impl GalleryItem {
    pub(crate) fn new(source: SourceRef, insertion_seq: u64) -> Self {
        Self {
            id: ItemId::fresh(),
            source,
            insertion_seq,
        }
    }

    /// Unique identity of the item.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Where the image bytes come from.
    #[must_use]
    pub fn source(&self) -> &SourceRef {
        &self.source
    }

    /// Position in the store's insertion order.
    #[must_use]
    pub fn insertion_seq(&self) -> u64 {
        self.insertion_seq
    }
}
