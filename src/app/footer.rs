use leptos::prelude::*;

use super::navigation::use_nav;
use crate::{
    content::{mailto, OWNER, SOCIAL_LINKS},
    nav::footer_links,
};

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_nav();

    view! {
        <footer class="bg-gray-900 text-white pt-16 pb-8">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-12 mb-12">
                    <div>
                        <h3 class="text-2xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            {OWNER.name}
                        </h3>
                        <p class="text-gray-400 leading-relaxed">
                            "Frontend Developer passionate about creating beautiful, responsive, and user-friendly web applications using modern technologies."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <div class="flex flex-col items-start space-y-2">
                            {footer_links()
                                .iter()
                                .map(|item| {
                                    view! {
                                        <button
                                            class="text-gray-400 hover:text-white hover:translate-x-2 transition-all"
                                            on:click=move |_| nav.navigate(item.section)
                                        >
                                            {item.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Get In Touch"</h4>
                        <a href=mailto() class="block text-gray-400 hover:text-white mb-4 break-all">
                            {OWNER.email}
                        </a>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-3 bg-gray-800 rounded-full hover:bg-blue-600 transition-colors"
                                        >
                                            <i class=link.icon.class() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-gray-400 text-sm">
                        "© " {env!("BUILD_YEAR")} " " {OWNER.name} ". Made with ♥ in Rust."
                    </p>
                    <button
                        class="p-3 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full shadow-lg hover:scale-110 transition-transform"
                        aria-label="Back to top"
                        on:click=move |_| nav.scroll_to_top()
                    >
                        "↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
