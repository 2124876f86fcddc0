use super::{SectionId, Viewport};
use crate::config::NavConfig;

/// What woke the tracker up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportSignal {
    Scroll,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub is_past_threshold: bool,
    pub active_section: SectionId,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            is_past_threshold: false,
            active_section: SectionId::Hero,
        }
    }
}

/// Derives header style and the active section from the viewport.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: NavConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recomputes the read model. Reads the viewport only.
    pub fn observe<V: Viewport + ?Sized>(
        &mut self,
        signal: ViewportSignal,
        viewport: &V,
    ) -> ScrollState {
        let scroll_y = viewport.scroll_y();
        let active_section =
            self.detect_active(viewport).unwrap_or(self.state.active_section);
        let next = ScrollState {
            scroll_y,
            is_past_threshold: scroll_y > self.config.solid_threshold,
            active_section,
        };
        if next.active_section != self.state.active_section {
            log::trace!("{signal:?}: active section {active_section}");
        }
        self.state = next;
        next
    }

    /// First mounted section, in page order, crossing the detection line.
    fn detect_active<V: Viewport + ?Sized>(&self, viewport: &V) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|&id| {
            viewport
                .section_rect(id)
                .is_some_and(|rect| rect.spans(self.config.detection_line))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::testing::FakeViewport;
    use crate::nav::SectionId::*;

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(NavConfig::default())
    }

    #[test]
    fn test_threshold_boundary() {
        let mut tracker = tracker();
        let viewport = FakeViewport::default();

        for (y, expected) in [(0.0, false), (50.0, false), (50.5, true), (51.0, true)] {
            viewport.scroll_y.set(y);
            let state = tracker.observe(ViewportSignal::Scroll, &viewport);
            assert_eq!(state.is_past_threshold, expected, "scroll_y = {y}");
            assert_eq!(state.scroll_y, y);
        }

        // no hysteresis on the way back up
        viewport.scroll_y.set(50.0);
        assert!(!tracker.observe(ViewportSignal::Scroll, &viewport).is_past_threshold);
    }

    #[test]
    fn test_first_match_wins() {
        let mut tracker = tracker();
        // Education is short enough that skills also spans the line
        let viewport = FakeViewport::with_sections(&[
            (About, -600.0, 20.0),
            (Education, 20.0, 100.0),
            (Projects, 100.0, 140.0),
            (Skills, 90.0, 900.0),
        ]);
        let state = tracker.observe(ViewportSignal::Scroll, &viewport);
        assert_eq!(state.active_section, Education);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let mut tracker = tracker();
        assert_eq!(tracker.state().active_section, Hero);

        let viewport = FakeViewport::with_sections(&[(Skills, -10.0, 300.0)]);
        assert_eq!(
            tracker.observe(ViewportSignal::Scroll, &viewport).active_section,
            Skills
        );

        viewport.set_rects(&[(Skills, 120.0, 300.0), (Contact, -400.0, 60.0)]);
        let first = tracker.observe(ViewportSignal::Scroll, &viewport);
        let second = tracker.observe(ViewportSignal::Scroll, &viewport);
        assert_eq!(first.active_section, Skills);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmounted_sections_skipped() {
        let mut tracker = tracker();
        let viewport = FakeViewport::default();
        let state = tracker.observe(ViewportSignal::Resize, &viewport);
        assert_eq!(state, ScrollState::default());

        viewport.set_rects(&[(Contact, 0.0, 500.0)]);
        assert_eq!(
            tracker.observe(ViewportSignal::Resize, &viewport).active_section,
            Contact
        );
    }

    #[test]
    fn test_custom_detection_line() {
        let mut tracker = ScrollTracker::new(NavConfig::default().with_detection_line(300.0));
        let viewport =
            FakeViewport::with_sections(&[(Hero, 0.0, 200.0), (About, 200.0, 800.0)]);
        assert_eq!(
            tracker.observe(ViewportSignal::Scroll, &viewport).active_section,
            About
        );
    }
}
