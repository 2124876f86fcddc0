use leptos::{html, prelude::*};

use super::navigation::{use_dismiss_on_outside_click, use_nav};
use crate::{
    content::{mailto, OWNER, SOCIAL_LINKS},
    nav::{SectionId, NAV_ITEMS},
};

const MENU_ITEM_STAGGER_MS: usize = 80;

#[component]
pub fn Header() -> impl IntoView {
    let nav = use_nav();
    let menu_ref = NodeRef::<html::Div>::new();
    let is_open = Signal::derive(move || nav.is_open());

    use_dismiss_on_outside_click(menu_ref, is_open, move |target| {
        nav.menu.update(|m| {
            m.pointer_down(target);
        });
    });

    // keep the page from scrolling behind the overlay
    Effect::new(move |_| {
        let open = is_open.get();
        if let Some(body) = document().body() {
            let _ = body.class_list().toggle_with_force("menu-open", open);
        }
    });
    #[cfg(feature = "hydrate")]
    on_cleanup(|| {
        if let Some(body) = document().body() {
            let _ = body.class_list().remove_1("menu-open");
        }
    });

    let header_class = move || {
        if nav.is_past_threshold() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/95 backdrop-blur-lg shadow-xl border-b border-gray-100"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <Brand />
                    <DesktopNav />
                    <a
                        href=mailto()
                        class="hidden lg:flex items-center px-6 py-2 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-full font-semibold shadow-lg hover:shadow-xl hover:scale-105 transition-all duration-300"
                    >
                        <i class="extra-code mr-2" />
                        "Let's Talk"
                    </a>
                    // outside clicks are measured against everything in here
                    <div node_ref=menu_ref class="md:hidden">
                        <MenuToggle />
                        <MobileMenu />
                        <FloatingMenuButton />
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Brand() -> impl IntoView {
    let nav = use_nav();
    view! {
        <button
            class="flex items-center space-x-2 cursor-pointer group hover:scale-105 transition-transform"
            on:click=move |_| nav.navigate(SectionId::Hero)
        >
            <div class="relative">
                <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-purple-600 rounded-xl flex items-center justify-center shadow-lg group-hover:rotate-180 transition-transform duration-300">
                    <i class="extra-code text-white text-xl" />
                </div>
                <div class="absolute -top-1 -right-1 w-3 h-3 bg-green-400 rounded-full animate-pulse" />
            </div>
            <div class="hidden sm:block text-left">
                <div class="text-lg font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                    "Portfolio"
                </div>
                <div class="text-xs text-gray-500 -mt-1">"Frontend Dev"</div>
            </div>
        </button>
    }
}

#[component]
fn DesktopNav() -> impl IntoView {
    let nav = use_nav();
    view! {
        <nav class="hidden md:flex items-center space-x-1">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let class = move || {
                        let base = "relative px-4 py-2 rounded-lg font-medium transition-all duration-300";
                        let tone = if nav.is_past_threshold() {
                            "text-gray-700 hover:text-blue-600 hover:bg-blue-50"
                        } else {
                            "text-white hover:text-blue-300 hover:bg-white/10"
                        };
                        let active = if nav.active_section() == item.section {
                            "underline underline-offset-8 decoration-2"
                        } else {
                            ""
                        };
                        format!("{base} {tone} {active}")
                    };
                    view! {
                        <button class=class on:click=move |_| nav.navigate(item.section)>
                            {item.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Hamburger icon that morphs into a cross while open.
#[component]
fn Burger(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "relative w-6 h-6 transition-transform duration-300 {}",
                if open.get() { "rotate-180" } else { "" },
            )
        }>
            <span class=move || {
                format!(
                    "absolute top-1 left-0 w-6 h-0.5 bg-current block transition-all duration-300 {}",
                    if open.get() { "translate-y-2 rotate-45" } else { "" },
                )
            } />
            <span class=move || {
                format!(
                    "absolute top-3 left-0 w-6 h-0.5 bg-current block transition-all duration-300 {}",
                    if open.get() { "opacity-0" } else { "" },
                )
            } />
            <span class=move || {
                format!(
                    "absolute top-5 left-0 w-6 h-0.5 bg-current block transition-all duration-300 {}",
                    if open.get() { "-translate-y-2 -rotate-45" } else { "" },
                )
            } />
        </div>
    }
}

#[component]
fn MenuToggle() -> impl IntoView {
    let nav = use_nav();
    let class = move || {
        let tone = if nav.is_past_threshold() {
            "bg-white/90 backdrop-blur-md text-gray-700 border border-gray-200 hover:bg-white hover:shadow-xl"
        } else {
            "bg-white/20 backdrop-blur-md text-white border border-white/30 hover:bg-white/30"
        };
        let open = if nav.is_open() {
            "bg-blue-500 text-white shadow-blue-500/25"
        } else {
            ""
        };
        format!("relative p-3 rounded-xl transition-all duration-300 shadow-lg {tone} {open}")
    };
    view! {
        <button
            class=class
            aria-label="Toggle navigation menu"
            aria-expanded=move || nav.is_open().to_string()
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                nav.menu.update(|m| {
                    m.toggle();
                });
            }
        >
            <Burger open=Signal::derive(move || nav.is_open()) />
        </button>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let nav = use_nav();
    let close = move || {
        nav.menu.update(|m| {
            m.close();
        })
    };

    view! {
        <div class=move || {
            format!(
                "md:hidden fixed inset-0 z-40 transition-opacity duration-300 {}",
                if nav.is_open() { "opacity-100 pointer-events-auto" } else { "opacity-0 pointer-events-none" },
            )
        }>
            <div class="absolute inset-0 bg-black/60 backdrop-blur-sm" on:click=move |_| close() />
            <div class=move || {
                format!(
                    "absolute right-0 top-0 h-full w-80 max-w-[90vw] bg-white shadow-2xl border-l border-gray-200 transition-transform duration-300 ease-out {}",
                    if nav.is_open() { "translate-x-0" } else { "translate-x-full" },
                )
            }>
                <div class="bg-white border-b border-gray-200 p-6">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-3">
                            <div class="w-12 h-12 bg-gradient-to-br from-blue-500 to-purple-600 rounded-xl flex items-center justify-center shadow-lg">
                                <i class="extra-code text-white text-xl" />
                            </div>
                            <div>
                                <h3 class="text-lg font-bold text-gray-900">"Portfolio"</h3>
                                <p class="text-sm text-gray-500">{OWNER.role}</p>
                            </div>
                        </div>
                        <button
                            class="p-2 rounded-lg bg-gray-100 hover:bg-gray-200 text-gray-600 hover:text-gray-800 transition-colors"
                            aria-label="Close navigation menu"
                            on:click=move |_| close()
                        >
                            "✕"
                        </button>
                    </div>
                </div>
                <div class="bg-white py-4">
                    <nav class="px-6 space-y-1">
                        {move || {
                            let active = nav.active_section();
                            let open = nav.is_open();
                            nav.menu
                                .with(|m| m.highlights(active).collect::<Vec<_>>())
                                .into_iter()
                                .enumerate()
                                .map(|(i, highlight)| {
                                    let item = highlight.item;
                                    let (row, dot) = if highlight.active {
                                        ("bg-blue-50 text-blue-600 border border-blue-200", "bg-blue-500")
                                    } else {
                                        ("text-gray-700 hover:text-blue-600 hover:bg-gray-50", "bg-gray-300")
                                    };
                                    let slide = if open { "opacity-100 translate-x-0" } else { "opacity-0 translate-x-5" };
                                    view! {
                                        <button
                                            class=format!("w-full flex items-center justify-between p-4 rounded-xl font-medium transition-all duration-300 hover:translate-x-1 {row} {slide}")
                                            style=format!("transition-delay: {}ms", i * MENU_ITEM_STAGGER_MS)
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                ev.stop_propagation();
                                                nav.navigate(item.section);
                                            }
                                        >
                                            <div class="flex items-center space-x-3">
                                                <div class=format!("w-2 h-2 rounded-full transition-colors {dot}") />
                                                <span class="text-left font-medium">{item.label}</span>
                                            </div>
                                            {highlight.active.then(|| view! {
                                                <div class="w-6 h-6 bg-blue-100 rounded-full flex items-center justify-center">
                                                    <div class="w-2 h-2 bg-blue-500 rounded-full" />
                                                </div>
                                            })}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </nav>
                    <div class="bg-white px-6 pt-6 pb-8 border-t border-gray-100 mt-4">
                        <a
                            href=mailto()
                            class="w-full flex items-center justify-center px-6 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-xl font-semibold shadow-lg hover:shadow-xl transition-all duration-300"
                        >
                            <i class="extra-code mr-2 text-lg" />
                            "Get In Touch"
                        </a>
                        <div class="flex justify-center space-x-4 mt-6">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-3 bg-blue-50 text-blue-600 rounded-xl hover:bg-blue-100 hover:scale-110 transition-all"
                                        >
                                            <i class=link.icon.class() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Shortcut to the menu once the header has scrolled out of reach.
#[component]
fn FloatingMenuButton() -> impl IntoView {
    let nav = use_nav();
    view! {
        <div class=move || {
            format!(
                "md:hidden fixed bottom-6 right-6 z-50 transition-all duration-300 ease-out {}",
                if nav.is_past_threshold() { "scale-100 opacity-100" } else { "scale-0 opacity-0" },
            )
        }>
            <button
                class="w-14 h-14 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full shadow-2xl flex items-center justify-center text-white hover:scale-110 transition-all duration-300 border-2 border-white/20"
                aria-label="Open navigation menu"
                on:click=move |_| {
                    nav.menu.update(|m| {
                        m.open();
                    });
                }
            >
                <Burger open=Signal::derive(move || nav.is_open()) />
            </button>
            <div class=move || {
                format!(
                    "absolute right-full mr-3 top-1/2 -translate-y-1/2 bg-gray-800 text-white px-3 py-2 rounded-lg text-sm font-medium whitespace-nowrap shadow-lg transition-opacity delay-500 duration-300 {}",
                    if nav.is_past_threshold() && !nav.is_open() { "opacity-100" } else { "opacity-0" },
                )
            }>"Menu"</div>
        </div>
    }
}
