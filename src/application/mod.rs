// SPDX-License-Identifier: MPL-2.0
//! Application layer - Controllers and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`carousel`]: Carousel viewport controller
//! - [`gallery`]: Item store paired with its carousel
//! - [`indicator`]: Sliding tab indicator controller
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The rendering layer drives the controllers and reads their snapshots
//!
//! # Example
//!
//! ```
//! use panel_kit::application::gallery::GallerySession;
//! use panel_kit::domain::gallery::{ItemCollectionStore, SourceRef};
//! use panel_kit::domain::ui::VisibleCount;
//!
//! let store = ItemCollectionStore::with_sources(
//!     (0..5).map(|n| SourceRef::Url(format!("https://example.com/{n}.png"))),
//! );
//! let mut gallery = GallerySession::new(store, VisibleCount::new(3));
//! gallery.next();
//! gallery.next();
//! let (_, viewport) = gallery.on_file_chosen(SourceRef::Url("blob:new".into()));
//! assert_eq!(viewport.current_index, 3);
//! assert!(viewport.is_at_end);
//! ```

pub mod carousel;
pub mod gallery;
pub mod indicator;
pub mod port;

pub use carousel::{BoundaryState, CarouselController, CarouselViewport};
pub use gallery::GallerySession;
pub use indicator::{IndicatorPhase, TabIndicatorController, TabIndicatorState};
