mod menu;
mod scroll;
mod section;

pub use menu::{
    Disclosure, MenuState, MenuTransition, NavHighlight, NavigationMenu, PendingScroll,
    PointerTarget,
};
pub use scroll::{ScrollState, ScrollTracker, ViewportSignal};
pub use section::{footer_links, NavItem, Rect, SectionId, NAV_ITEMS};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("no section anchor named {0:?}")]
    MissingAnchor(String),
    #[error("smooth scrolling is not supported")]
    UnsupportedSmoothScroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

/// The page as seen by the navigation core.
///
/// Rects are relative to the viewport, `scroll_y` is the document's vertical scroll offset.
pub trait Viewport {
    fn scroll_y(&self) -> f64;

    /// `None` when the section's anchor is not mounted.
    fn section_rect(&self, id: SectionId) -> Option<Rect>;

    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), NavError>;
}

/// Smooth-scrolls to `offset`, jumping there instead when smooth scrolling is unavailable.
pub fn scroll_to_offset<V: Viewport + ?Sized>(viewport: &V, offset: f64) -> Result<(), NavError> {
    match viewport.scroll_to(offset, ScrollMode::Smooth) {
        Err(NavError::UnsupportedSmoothScroll) => {
            log::debug!("smooth scroll unavailable, jumping to {offset}");
            viewport.scroll_to(offset, ScrollMode::Instant)
        }
        res => res,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
    };

    use super::*;

    /// In-memory viewport that records every scroll request.
    #[derive(Default)]
    pub struct FakeViewport {
        pub scroll_y: Cell<f64>,
        pub rects: RefCell<HashMap<SectionId, Rect>>,
        pub scrolls: RefCell<Vec<(f64, ScrollMode)>>,
        pub smooth_unsupported: bool,
    }

    impl FakeViewport {
        pub fn with_sections(sections: &[(SectionId, f64, f64)]) -> Self {
            let viewport = Self::default();
            viewport.set_rects(sections);
            viewport
        }

        pub fn set_rects(&self, sections: &[(SectionId, f64, f64)]) {
            let mut rects = self.rects.borrow_mut();
            rects.clear();
            for &(id, top, bottom) in sections {
                rects.insert(id, Rect { top, bottom });
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y.get()
        }

        fn section_rect(&self, id: SectionId) -> Option<Rect> {
            self.rects.borrow().get(&id).copied()
        }

        fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), NavError> {
            if self.smooth_unsupported && mode == ScrollMode::Smooth {
                return Err(NavError::UnsupportedSmoothScroll);
            }
            self.scrolls.borrow_mut().push((top, mode));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeViewport;
    use super::*;
    use crate::config::NavConfig;

    #[test]
    fn test_scroll_to_offset_falls_back() {
        let viewport = FakeViewport {
            smooth_unsupported: true,
            ..Default::default()
        };
        scroll_to_offset(&viewport, 0.0).expect("instant scroll succeeds");
        assert_eq!(*viewport.scrolls.borrow(), vec![(0.0, ScrollMode::Instant)]);
    }

    #[test]
    fn test_page_walkthrough() {
        use crate::nav::SectionId::*;

        let config = NavConfig::default();
        let mut tracker = ScrollTracker::new(config);
        let mut menu = NavigationMenu::new(config);

        // Scrolled so that only projects crosses the detection line
        let viewport = FakeViewport::with_sections(&[
            (Hero, -2400.0, -1800.0),
            (About, -1800.0, -1200.0),
            (Education, -1200.0, -400.0),
            (Projects, -400.0, 600.0),
            (Skills, 600.0, 1300.0),
            (Contact, 1300.0, 2000.0),
        ]);
        viewport.scroll_y.set(2400.0);
        let state = tracker.observe(ViewportSignal::Scroll, &viewport);
        assert_eq!(state.active_section, Projects);
        assert!(state.is_past_threshold);

        let active = menu
            .highlights(state.active_section)
            .filter(|h| h.active)
            .map(|h| h.item.section)
            .collect::<Vec<_>>();
        assert_eq!(active, vec![Projects]);

        // A gap under the detection line keeps the last good value
        viewport.set_rects(&[(Projects, -900.0, 40.0), (Skills, 160.0, 860.0)]);
        let state = tracker.observe(ViewportSignal::Scroll, &viewport);
        assert_eq!(state.active_section, Projects);

        // Selecting a destination from the open menu
        menu.toggle();
        let pending = menu.navigate("skills", &viewport).expect("skills is mounted");
        assert!(!menu.is_open());
        assert!(viewport.scrolls.borrow().is_empty());
        let offset = menu
            .complete(&pending, &viewport)
            .expect("anchor still mounted");
        assert_eq!(offset, Some(160.0 + 2400.0 - 80.0));
        assert_eq!(
            *viewport.scrolls.borrow(),
            vec![(2480.0, ScrollMode::Smooth)]
        );
    }
}
