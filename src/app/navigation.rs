use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener, use_window};
use wasm_bindgen::{JsCast, JsValue};

use crate::{
    config::NavConfig,
    nav::{
        scroll_to_offset, NavError, NavigationMenu, PointerTarget, Rect, ScrollMode, ScrollState,
        ScrollTracker, SectionId, Viewport, ViewportSignal,
    },
};

/// The real browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl BrowserViewport {
    fn supports_smooth_scroll() -> bool {
        document()
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .and_then(|el| {
                js_sys::Reflect::has(&el.style(), &JsValue::from_str("scrollBehavior")).ok()
            })
            .unwrap_or(false)
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn section_rect(&self, id: SectionId) -> Option<Rect> {
        let rect = document()
            .get_element_by_id(id.anchor())?
            .get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) -> Result<(), NavError> {
        match mode {
            ScrollMode::Smooth => {
                if !Self::supports_smooth_scroll() {
                    return Err(NavError::UnsupportedSmoothScroll);
                }
                let opts = web_sys::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                window().scroll_to_with_scroll_to_options(&opts);
            }
            ScrollMode::Instant => window().scroll_to_with_x_and_y(0.0, top),
        }
        Ok(())
    }
}

/// Tracks scroll position from window scroll and resize events.
///
/// Listeners are removed when the calling owner is disposed.
pub fn use_scroll_tracker(config: NavConfig) -> Signal<ScrollState> {
    let tracker = StoredValue::new(ScrollTracker::new(config));
    let (state, set_state) = signal(ScrollState::default());

    let recompute = move |signal: ViewportSignal| {
        if let Some(next) = tracker.try_update_value(|t| t.observe(signal, &BrowserViewport)) {
            if next != state.get_untracked() {
                set_state.set(next);
            }
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        recompute(ViewportSignal::Scroll)
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        recompute(ViewportSignal::Resize)
    });
    // page may load already scrolled
    Effect::new(move |_| recompute(ViewportSignal::Resize));

    state.into()
}

/// Shared navigation state, provided by the home page.
#[derive(Debug, Clone, Copy)]
pub struct NavContext {
    pub menu: RwSignal<NavigationMenu>,
    pub scroll: Signal<ScrollState>,
}

impl NavContext {
    pub fn new(config: NavConfig) -> Self {
        Self {
            menu: RwSignal::new(NavigationMenu::new(config)),
            scroll: use_scroll_tracker(config),
        }
    }

    pub fn is_past_threshold(&self) -> bool {
        self.scroll.with(|s| s.is_past_threshold)
    }

    pub fn active_section(&self) -> SectionId {
        self.scroll.with(|s| s.active_section)
    }

    pub fn is_open(&self) -> bool {
        self.menu.with(|m| m.is_open())
    }

    /// Closes the menu now and scrolls once its close transition has had time to finish.
    ///
    /// `complete` only ever runs from the timer callback, never inline.
    pub fn navigate(&self, target: SectionId) {
        let menu = self.menu;
        let pending = match menu.try_update(|m| m.navigate(target.anchor(), &BrowserViewport)) {
            Some(Ok(pending)) => pending,
            Some(Err(e)) => {
                log::debug!("ignoring navigation: {e}");
                return;
            }
            None => return,
        };
        let delay = pending.delay;
        set_timeout(
            move || {
                // untracked: a completed scroll doesn't change anything the view reads
                let res = menu.try_update_untracked(|m| m.complete(&pending, &BrowserViewport));
                if let Some(Err(e)) = res {
                    log::debug!("scroll to {} dropped: {e}", pending.target);
                }
            },
            delay,
        );
    }

    pub fn scroll_to_top(&self) {
        if let Err(e) = scroll_to_offset(&BrowserViewport, 0.0) {
            log::debug!("scroll to top failed: {e}");
        }
    }
}

pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}

/// Runs `dismiss` on pointer-down outside `target`, but only while `is_open` holds.
///
/// Listens for `pointerdown` rather than `click` so the popover closes as the press starts.
/// The document listener is installed when `is_open` turns true and stopped when it turns
/// false or the owner is cleaned up.
pub fn use_dismiss_on_outside_click<F>(target: NodeRef<html::Div>, is_open: Signal<bool>, dismiss: F)
where
    F: Fn(PointerTarget) + Clone + 'static,
{
    let stop_handle = StoredValue::new_local(None::<Box<dyn FnOnce()>>);
    let teardown = move || {
        if let Some(stop) = stop_handle.try_update_value(|s| s.take()).flatten() {
            stop();
        }
    };

    Effect::new(move |_| {
        if is_open.get() {
            teardown();
            let dismiss = dismiss.clone();
            let stop = use_event_listener(use_document(), ev::pointerdown, move |e| {
                let contained = target.get_untracked().is_some_and(|panel| {
                    e.target()
                        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                        .is_some_and(|node| panel.contains(Some(&node)))
                });
                let hit = PointerTarget::from_containment(contained);
                if hit == PointerTarget::Outside {
                    dismiss(hit);
                }
            });
            stop_handle.set_value(Some(Box::new(stop)));
        } else {
            teardown();
        }
    });
    on_cleanup(teardown);
}
