use leptos::prelude::*;

use super::reveal::{stagger, Reveal};
use crate::content::{Accent, LANGUAGES, SKILL_CATEGORIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900">
                        "Skills & "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Expertise"
                        </span>
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal delay_ms=stagger(i, 200)>
                                    <div class="p-6 bg-white rounded-2xl shadow-md">
                                        <h3 class=format!("text-xl font-bold mb-6 {}", category.accent.text())>
                                            {category.title}
                                        </h3>
                                        <div class="space-y-4">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|s| {
                                                    view! { <LevelBar name=s.name level=s.level accent=category.accent /> }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal class="mt-12 max-w-2xl mx-auto">
                    <div class="p-6 bg-white rounded-2xl shadow-md">
                        <h3 class="text-xl font-bold mb-6 text-gray-900">"Languages"</h3>
                        <div class="space-y-4">
                            {LANGUAGES
                                .iter()
                                .map(|l| {
                                    view! {
                                        <LevelBar name=l.name level=l.level accent=Accent::Indigo>
                                            <span class="text-xs text-gray-500 ml-2">{l.description}</span>
                                        </LevelBar>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn LevelBar(
    name: &'static str,
    level: u8,
    accent: Accent,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let level = level.min(100);
    view! {
        <div>
            <div class="flex justify-between mb-1 text-sm font-medium text-gray-700">
                <span>{name} {children.map(|c| c())}</span>
                <span>{level} "%"</span>
            </div>
            <div class="h-2 bg-gray-200 rounded-full overflow-hidden">
                <div
                    class=format!("h-full rounded-full bg-gradient-to-r {}", accent.gradient())
                    style=format!("width: {level}%")
                />
            </div>
        </div>
    }
}
