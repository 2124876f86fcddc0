use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Entrance transition presets. The CSS lives in `input.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    FadeUp,
    ScaleIn,
    SlideLeft,
    SlideRight,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal-fade-up",
            Self::ScaleIn => "reveal-scale-in",
            Self::SlideLeft => "reveal-slide-left",
            Self::SlideRight => "reveal-slide-right",
        }
    }
}

/// Delay for the `index`th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Plays `motion` on its children the first time they scroll into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] motion: Motion,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !shown.get_untracked() {
            set_shown.set(true);
        }
    });

    let classes = move || {
        format!(
            "reveal {} {} {}",
            motion.class(),
            if shown.get() { "is-shown" } else { "" },
            class
        )
    };

    view! {
        <div node_ref=target class=classes style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}
