use std::time::Duration;

use super::{scroll_to_offset, NavError, NavItem, SectionId, Viewport, NAV_ITEMS};
use crate::config::NavConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Result of a state change, so callers know when to install or drop listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    Opened,
    Closed,
    Unchanged,
}

/// Where a pointer-down landed relative to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

impl PointerTarget {
    pub fn from_containment(contained: bool) -> Self {
        if contained {
            Self::Inside
        } else {
            Self::Outside
        }
    }
}

/// Open/closed state of a popover that dismisses on outside pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    state: MenuState,
}

impl Disclosure {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) -> MenuTransition {
        match self.state {
            MenuState::Open => self.close(),
            MenuState::Closed => self.open(),
        }
    }

    pub fn open(&mut self) -> MenuTransition {
        self.set(MenuState::Open)
    }

    pub fn close(&mut self) -> MenuTransition {
        self.set(MenuState::Closed)
    }

    pub fn pointer_down(&mut self, target: PointerTarget) -> MenuTransition {
        match target {
            PointerTarget::Outside => self.close(),
            PointerTarget::Inside => MenuTransition::Unchanged,
        }
    }

    fn set(&mut self, state: MenuState) -> MenuTransition {
        if self.state == state {
            return MenuTransition::Unchanged;
        }
        self.state = state;
        match state {
            MenuState::Open => MenuTransition::Opened,
            MenuState::Closed => MenuTransition::Closed,
        }
    }
}

/// A scroll waiting for the menu's close transition to finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingScroll {
    pub ticket: u64,
    pub target: SectionId,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavHighlight {
    pub item: &'static NavItem,
    pub active: bool,
}

/// The mobile overlay menu and the in-page navigation it drives.
///
/// When navigations overlap, the last one wins: each `navigate` supersedes the
/// ticket of any scroll still waiting on its delay.
#[derive(Debug, Clone)]
pub struct NavigationMenu {
    config: NavConfig,
    disclosure: Disclosure,
    latest_ticket: u64,
}

impl NavigationMenu {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            disclosure: Disclosure::default(),
            latest_ticket: 0,
        }
    }

    pub fn state(&self) -> MenuState {
        self.disclosure.state()
    }

    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// The outside-click listener is only live while the menu is open.
    pub fn listens_for_outside_clicks(&self) -> bool {
        self.is_open()
    }

    pub fn toggle(&mut self) -> MenuTransition {
        self.disclosure.toggle()
    }

    pub fn open(&mut self) -> MenuTransition {
        self.disclosure.open()
    }

    pub fn close(&mut self) -> MenuTransition {
        self.disclosure.close()
    }

    pub fn pointer_down(&mut self, target: PointerTarget) -> MenuTransition {
        self.disclosure.pointer_down(target)
    }

    /// Closes the menu and schedules a scroll to `target`.
    ///
    /// An unknown or unmounted target leaves everything untouched. The caller must wait
    /// `PendingScroll::delay` before handing the request to [`Self::complete`].
    pub fn navigate<V: Viewport + ?Sized>(
        &mut self,
        target: &str,
        viewport: &V,
    ) -> Result<PendingScroll, NavError> {
        let section = target.parse::<SectionId>()?;
        if viewport.section_rect(section).is_none() {
            return Err(NavError::MissingAnchor(target.to_string()));
        }

        self.disclosure.close();
        self.latest_ticket += 1;
        Ok(PendingScroll {
            ticket: self.latest_ticket,
            target: section,
            delay: self.config.close_delay,
        })
    }

    /// Performs a scheduled scroll, returning the offset scrolled to.
    ///
    /// Superseded requests return `Ok(None)` without scrolling.
    pub fn complete<V: Viewport + ?Sized>(
        &mut self,
        pending: &PendingScroll,
        viewport: &V,
    ) -> Result<Option<f64>, NavError> {
        if pending.ticket != self.latest_ticket {
            log::debug!("dropping superseded scroll to {}", pending.target);
            return Ok(None);
        }
        let rect = viewport
            .section_rect(pending.target)
            .ok_or_else(|| NavError::MissingAnchor(pending.target.anchor().to_string()))?;
        let offset = rect.top + viewport.scroll_y() - self.config.header_offset;
        scroll_to_offset(viewport, offset)?;
        Ok(Some(offset))
    }

    pub fn highlights(&self, active: SectionId) -> impl Iterator<Item = NavHighlight> {
        NAV_ITEMS.iter().map(move |item| NavHighlight {
            item,
            active: item.section == active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{testing::FakeViewport, ScrollMode};
    use crate::nav::SectionId::*;

    fn page() -> FakeViewport {
        let viewport = FakeViewport::with_sections(&[
            (Hero, -1500.0, -800.0),
            (About, -800.0, -200.0),
            (Projects, 400.0, 1400.0),
            (Contact, 1400.0, 2000.0),
        ]);
        viewport.scroll_y.set(1500.0);
        viewport
    }

    #[test]
    fn test_disclosure_transitions() {
        let mut d = Disclosure::default();
        assert_eq!(d.state(), MenuState::Closed);
        assert_eq!(d.toggle(), MenuTransition::Opened);
        assert_eq!(d.open(), MenuTransition::Unchanged);
        assert_eq!(d.pointer_down(PointerTarget::Inside), MenuTransition::Unchanged);
        assert!(d.is_open());
        assert_eq!(d.toggle(), MenuTransition::Closed);
        assert_eq!(d.close(), MenuTransition::Unchanged);
    }

    #[test]
    fn test_pointer_down_by_containment() {
        let mut d = Disclosure::default();
        d.open();
        assert_eq!(
            d.pointer_down(PointerTarget::from_containment(true)),
            MenuTransition::Unchanged
        );
        assert!(d.is_open());
        assert_eq!(
            d.pointer_down(PointerTarget::from_containment(false)),
            MenuTransition::Closed
        );
    }

    #[test]
    fn test_outside_click() {
        let mut menu = NavigationMenu::new(NavConfig::default());
        assert!(!menu.listens_for_outside_clicks());
        assert_eq!(
            menu.pointer_down(PointerTarget::Outside),
            MenuTransition::Unchanged
        );
        assert_eq!(menu.state(), MenuState::Closed);

        menu.toggle();
        assert!(menu.listens_for_outside_clicks());
        assert_eq!(
            menu.pointer_down(PointerTarget::Outside),
            MenuTransition::Closed
        );
        assert!(!menu.listens_for_outside_clicks());
    }

    #[test]
    fn test_navigate_closes_then_scrolls() {
        let viewport = page();
        let mut menu = NavigationMenu::new(NavConfig::default());
        menu.open();

        let pending = menu.navigate("projects", &viewport).expect("projects is mounted");
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(pending.target, Projects);
        assert!(pending.delay >= Duration::from_millis(300));
        assert!(viewport.scrolls.borrow().is_empty());

        let offset = menu.complete(&pending, &viewport).expect("scrolls");
        assert_eq!(offset, Some(400.0 + 1500.0 - 80.0));
        assert_eq!(
            *viewport.scrolls.borrow(),
            vec![(1820.0, ScrollMode::Smooth)]
        );
    }

    #[test]
    fn test_navigate_waits_configured_delay() {
        let viewport = page();
        let delay = Duration::from_millis(450);
        let mut menu = NavigationMenu::new(NavConfig::default().with_close_delay(delay));
        menu.open();

        let pending = menu.navigate("about", &viewport).expect("about is mounted");
        assert_eq!(pending.delay, delay);
        // closed before anything scrolls
        assert!(!menu.is_open());
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_navigate_uses_position_after_delay() {
        let viewport = page();
        let mut menu = NavigationMenu::new(NavConfig::default());
        let pending = menu.navigate("contact", &viewport).expect("contact is mounted");

        // the page moved while the menu was closing
        viewport.scroll_y.set(1600.0);
        viewport.set_rects(&[(Contact, 1300.0, 1900.0)]);
        assert_eq!(menu.complete(&pending, &viewport), Ok(Some(2820.0)));
    }

    #[test]
    fn test_navigate_unknown_is_noop() {
        let viewport = page();
        let mut menu = NavigationMenu::new(NavConfig::default());
        menu.open();

        assert_eq!(
            menu.navigate("doesNotExist", &viewport),
            Err(NavError::MissingAnchor("doesNotExist".to_string()))
        );
        // known id whose anchor is not mounted
        assert!(menu.navigate("skills", &viewport).is_err());
        assert!(menu.is_open());
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_navigate_last_call_wins() {
        let viewport = page();
        let mut menu = NavigationMenu::new(NavConfig::default());
        menu.open();

        let first = menu.navigate("about", &viewport).expect("about is mounted");
        let second = menu.navigate("contact", &viewport).expect("contact is mounted");
        assert_ne!(first.ticket, second.ticket);

        assert_eq!(menu.complete(&first, &viewport), Ok(None));
        assert_eq!(
            menu.complete(&second, &viewport),
            Ok(Some(1400.0 + 1500.0 - 80.0))
        );
        assert_eq!(viewport.scrolls.borrow().len(), 1);
    }

    #[test]
    fn test_instant_fallback_same_offset() {
        let viewport = FakeViewport {
            smooth_unsupported: true,
            ..page()
        };
        let mut menu = NavigationMenu::new(NavConfig::default());
        let pending = menu.navigate("hero", &viewport).expect("hero is mounted");
        assert_eq!(menu.complete(&pending, &viewport), Ok(Some(-80.0)));
        assert_eq!(
            *viewport.scrolls.borrow(),
            vec![(-80.0, ScrollMode::Instant)]
        );
    }

    #[test]
    fn test_anchor_removed_before_delay() {
        let viewport = page();
        let mut menu = NavigationMenu::new(NavConfig::default());
        let pending = menu.navigate("about", &viewport).expect("about is mounted");
        viewport.set_rects(&[]);
        assert_eq!(
            menu.complete(&pending, &viewport),
            Err(NavError::MissingAnchor("about".to_string()))
        );
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_highlights() {
        let menu = NavigationMenu::new(NavConfig::default());
        let flagged = menu
            .highlights(Skills)
            .filter(|h| h.active)
            .map(|h| h.item.label)
            .collect::<Vec<_>>();
        assert_eq!(flagged, vec!["Skills"]);
        assert_eq!(menu.highlights(Hero).count(), NAV_ITEMS.len());
    }
}
