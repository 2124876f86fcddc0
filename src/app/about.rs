use leptos::prelude::*;

use super::reveal::{stagger, Motion, Reveal};
use crate::content::{mailto, JOURNEY, OWNER, SOCIAL_LINKS, STATS};

const HIGHLIGHT_TECH: [(&str, &str); 3] = [
    ("React.js", "text-blue-500"),
    ("JavaScript", "text-yellow-500"),
    ("CSS3", "text-blue-600"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white relative overflow-hidden">
            <div class="container mx-auto px-4 relative">
                <Reveal class="text-center mb-16">
                    <span class="inline-block px-4 py-2 bg-blue-100 text-blue-600 rounded-full text-sm font-medium mb-4">
                        "Get to know me"
                    </span>
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900">
                        "About "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Me"
                        </span>
                    </h2>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-6 mb-16">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <Reveal motion=Motion::ScaleIn delay_ms=stagger(i, 200)>
                                    <div class="p-6 bg-gradient-to-br from-blue-50 to-purple-50 rounded-2xl text-center shadow-sm hover:shadow-lg transition-shadow">
                                        <i class=format!("{} text-3xl text-blue-600", stat.icon.class()) />
                                        <div class="text-3xl font-bold text-gray-900 mt-2">{stat.number}</div>
                                        <div class="text-gray-600">{stat.label}</div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal motion=Motion::SlideLeft class="space-y-6">
                        <h3 class="text-2xl font-bold text-gray-900">"My Journey"</h3>
                        {JOURNEY
                            .iter()
                            .map(|p| view! { <p class="text-gray-600 leading-relaxed">{*p}</p> })
                            .collect_view()}
                        <div class="flex flex-wrap gap-3">
                            {HIGHLIGHT_TECH
                                .iter()
                                .map(|(name, color)| {
                                    view! {
                                        <span class=format!("px-4 py-2 bg-gray-50 rounded-full font-medium {color}")>
                                            {*name}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal motion=Motion::SlideRight>
                        <div class="p-8 bg-gradient-to-br from-blue-600 to-purple-700 rounded-3xl text-white shadow-2xl">
                            <h3 class="text-2xl font-bold mb-4">"Let's Connect"</h3>
                            <p class="text-blue-100 mb-6">
                                "I'm always excited to discuss new opportunities, collaborate on interesting projects, or simply chat about the latest in web development."
                            </p>
                            <div class="space-y-3 mb-6">
                                <a href=mailto() class="flex items-center space-x-3 hover:text-blue-200">
                                    <i class="extra-email" />
                                    <span>{OWNER.email}</span>
                                </a>
                                <div class="flex items-center space-x-3">
                                    <i class="extra-location" />
                                    <span>{OWNER.location}</span>
                                </div>
                            </div>
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
                                                class="p-3 bg-white/10 rounded-xl hover:bg-white/20 transition-colors"
                                            >
                                                <i class=link.icon.class() />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
