// SPDX-License-Identifier: MPL-2.0
//! Property tests for the carousel viewport invariants.

use panel_kit::application::{CarouselController, CarouselViewport};
use panel_kit::domain::ui::VisibleCount;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Previous,
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Next), Just(Nav::Previous)]
}

fn assert_invariants(viewport: &CarouselViewport) -> Result<(), TestCaseError> {
    let max_start = viewport.item_count.saturating_sub(viewport.visible_count);
    prop_assert!(viewport.current_index <= max_start);
    prop_assert!(viewport.current_index <= viewport.item_count.saturating_sub(1));
    prop_assert_eq!(viewport.is_at_start, viewport.current_index == 0);
    if viewport.item_count > viewport.visible_count {
        prop_assert_eq!(viewport.is_at_end, viewport.current_index >= max_start);
    } else {
        prop_assert!(viewport.is_at_start && viewport.is_at_end);
    }
    Ok(())
}

proptest! {
    #[test]
    fn initialize_is_at_start(items in 0usize..64, visible in 1usize..12) {
        let viewport = CarouselController::new(items, VisibleCount::new(visible)).viewport();
        prop_assert!(viewport.is_at_start);
        prop_assert_eq!(viewport.is_at_end, items <= visible);
    }

    #[test]
    fn navigation_never_leaves_bounds(
        items in 0usize..64,
        visible in 1usize..12,
        moves in prop::collection::vec(nav_strategy(), 0..200),
    ) {
        let mut carousel = CarouselController::new(items, VisibleCount::new(visible));
        for step in moves {
            let viewport = match step {
                Nav::Next => carousel.next(),
                Nav::Previous => carousel.previous(),
            };
            assert_invariants(&viewport)?;
        }
    }

    #[test]
    fn next_at_end_changes_nothing(items in 0usize..64, visible in 1usize..12) {
        let mut carousel = CarouselController::new(items, VisibleCount::new(visible));
        while !carousel.viewport().is_at_end {
            carousel.next();
        }
        let at_end = carousel.viewport();
        prop_assert_eq!(carousel.next(), at_end);
        prop_assert_eq!(carousel.next(), at_end);
    }

    #[test]
    fn insertion_always_ends_at_end(
        items in 0usize..64,
        visible in 1usize..12,
        moves in prop::collection::vec(nav_strategy(), 0..20),
    ) {
        let mut carousel = CarouselController::new(items, VisibleCount::new(visible));
        for step in moves {
            match step {
                Nav::Next => carousel.next(),
                Nav::Previous => carousel.previous(),
            };
        }
        let viewport = carousel.on_item_inserted(items + 1);
        assert_invariants(&viewport)?;
        prop_assert!(viewport.is_at_end);
        prop_assert_eq!(viewport.visible_range().end, items + 1);
    }
}
