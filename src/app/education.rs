use leptos::prelude::*;

use super::reveal::{stagger, Reveal};
use crate::content::{Education as Entry, EDUCATION};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900">
                        "Education & "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Certifications"
                        </span>
                    </h2>
                </Reveal>
                <div class="max-w-4xl mx-auto space-y-8">
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! {
                                <Reveal delay_ms=stagger(i, 200)>
                                    <EducationCard entry=*entry />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(entry: Entry) -> impl IntoView {
    let detail = |label: &'static str, value: Option<&'static str>| {
        value.map(|v| {
            view! {
                <p class="text-gray-600">
                    <span class="font-semibold text-gray-800">{label} ": "</span>
                    {v}
                </p>
            }
        })
    };

    view! {
        <div class="flex gap-6 p-6 bg-white rounded-2xl shadow-md hover:shadow-xl transition-shadow">
            <div class=format!(
                "flex-shrink-0 w-14 h-14 rounded-xl bg-gradient-to-br {} flex items-center justify-center text-white text-2xl",
                entry.accent.gradient(),
            )>
                <i class=entry.icon.class() />
            </div>
            <div class="space-y-2">
                <span class=format!("text-sm font-medium {}", entry.accent.text())>{entry.kind}</span>
                <h3 class="text-xl font-bold text-gray-900">{entry.title}</h3>
                <p class="text-gray-700">{entry.institution}</p>
                <p class="text-sm text-gray-500">{entry.period}</p>
                {detail("Grade", entry.grade)}
                {detail("Graduation Project", entry.project)}
                {detail("Activities", entry.activities)}
                {entry.description.map(|d| view! { <p class="text-gray-600">{d}</p> })}
            </div>
        </div>
    }
}
