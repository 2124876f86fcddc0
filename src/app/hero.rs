use leptos::{html, prelude::*};

use super::{
    navigation::use_dismiss_on_outside_click,
    reveal::{stagger, Motion, Reveal},
};
use crate::{
    content::{mailto, CV_OPTIONS, OWNER, SOCIAL_LINKS},
    nav::Disclosure,
};

const FLOATERS: [(&str, &str, u32); 6] = [
    ("w-2 h-2", "top-20 left-[10%]", 0),
    ("w-3 h-3", "top-40 right-[15%]", 1000),
    ("w-4 h-4", "top-60 left-[20%]", 2000),
    ("w-2 h-2", "bottom-40 right-[10%]", 1500),
    ("w-3 h-3", "bottom-60 left-[15%]", 500),
    ("w-5 h-5", "top-[30%] right-[5%]", 2500),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center overflow-hidden bg-gradient-to-br from-slate-900 via-blue-900 to-indigo-900 text-white"
        >
            <div class="absolute inset-0">
                {FLOATERS
                    .into_iter()
                    .map(|(size, position, delay)| {
                        view! {
                            <div
                                class=format!("absolute {position} {size} bg-blue-400 rounded-full opacity-30 animate-float")
                                style=format!("animation-delay: {delay}ms")
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="container mx-auto px-6 pt-24 pb-16 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <Reveal delay_ms=stagger(0, 200)>
                            <h1 class="text-5xl md:text-6xl font-bold">
                                "Hi, I'm "
                                <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                                    {OWNER.first_name}
                                </span>
                            </h1>
                        </Reveal>
                        <Reveal delay_ms=stagger(1, 200)>
                            <div class="flex items-center text-blue-200">
                                <i class="extra-location mr-2" />
                                <span>{OWNER.location}</span>
                            </div>
                        </Reveal>
                        <Reveal delay_ms=stagger(2, 200)>
                            <h2 class="text-2xl md:text-3xl font-semibold text-blue-100">
                                {OWNER.role}
                            </h2>
                            <p class="text-lg text-blue-100/80 max-w-xl leading-relaxed mt-4">
                                {OWNER.tagline}
                                " Let's build something amazing together! 🚀"
                            </p>
                        </Reveal>
                        <Reveal delay_ms=stagger(3, 200) class="flex flex-wrap gap-4">
                            <a
                                href=mailto()
                                class="inline-flex items-center px-8 py-3 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full font-semibold shadow-lg hover:shadow-xl hover:scale-105 transition-all"
                            >
                                <i class="extra-email mr-2" />
                                "Get In Touch"
                            </a>
                            <CvDropdown />
                        </Reveal>
                        <Reveal delay_ms=stagger(4, 200) class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-3 bg-white/10 rounded-full text-2xl hover:bg-white/20 hover:scale-110 transition-all"
                                        >
                                            <i class=link.icon.class() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                    </div>
                    <Reveal motion=Motion::ScaleIn class="flex justify-center">
                        <div class="relative animate-float">
                            <div class="absolute inset-0 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full blur-2xl opacity-50 animate-pulse" />
                            <img
                                src="/profile.jpg"
                                alt=OWNER.name
                                class="relative w-72 h-72 md:w-80 md:h-80 rounded-full object-cover border-4 border-white/20 shadow-2xl"
                            />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CvDropdown() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let dropdown = RwSignal::new(Disclosure::default());
    let is_open = Signal::derive(move || dropdown.with(|d| d.is_open()));

    use_dismiss_on_outside_click(container, is_open, move |target| {
        dropdown.update(|d| {
            d.pointer_down(target);
        });
    });

    let close = move || {
        dropdown.update(|d| {
            d.close();
        })
    };

    view! {
        <div node_ref=container class="relative">
            <button
                class="inline-flex items-center px-8 py-3 border-2 border-white/30 rounded-full font-semibold hover:bg-white/10 transition-all"
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| {
                    dropdown.update(|d| {
                        d.toggle();
                    });
                }
            >
                <i class="extra-download mr-2" />
                "Download CV"
                <span class=move || {
                    format!("ml-2 text-xs transition-transform {}", if is_open.get() { "rotate-180" } else { "" })
                }>"▼"</span>
            </button>
            <div
                class=move || {
                    format!(
                        "absolute left-0 top-full mt-2 w-64 bg-white text-gray-800 rounded-xl shadow-2xl overflow-hidden z-[9999] transition-all duration-200 {}",
                        if is_open.get() {
                            "opacity-100 translate-y-0 scale-100 pointer-events-auto"
                        } else {
                            "opacity-0 translate-y-2 scale-95 pointer-events-none"
                        },
                    )
                }
                role="menu"
            >
                {CV_OPTIONS
                    .iter()
                    .map(|option| {
                        let (target, rel) = match option.download {
                            Some(_) => (None, None),
                            None => (Some("_blank"), Some("noopener noreferrer")),
                        };
                        view! {
                            <a
                                href=option.href
                                download=option.download
                                target=target
                                rel=rel
                                role="menuitem"
                                class="flex flex-col px-4 py-3 hover:bg-blue-50 transition-colors"
                                on:click=move |_| close()
                            >
                                <span class="font-medium">{option.label}</span>
                                <span class="text-xs text-gray-500">{option.detail}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
