use leptos::prelude::*;

use super::reveal::{stagger, Reveal};
use crate::content::{Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900">
                        "Featured "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h2>
                    <p class="text-gray-600 mt-4 max-w-2xl mx-auto">
                        "A selection of products I've designed and built, from AI tools to full platforms."
                    </p>
                </Reveal>
                <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal delay_ms=stagger(i, 150) class="h-full">
                                    <ProjectCard project=*project />
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
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group h-full flex flex-col bg-white rounded-2xl shadow-lg hover:shadow-2xl hover:-translate-y-2 transition-all duration-300 overflow-hidden border border-gray-100">
            <div class=format!(
                "h-2 bg-gradient-to-r {}",
                project.accent.gradient(),
            ) />
            <div class="p-6 flex flex-col flex-grow space-y-4">
                <div class="flex items-center justify-between">
                    <span class=format!("text-sm font-medium {}", project.accent.text())>
                        {project.kind}
                    </span>
                    <i class=format!("{} text-2xl {}", project.icon.class(), project.accent.text()) />
                </div>
                <h3 class="text-xl font-bold text-gray-900 group-hover:text-blue-600 transition-colors">
                    {project.title}
                </h3>
                {project
                    .company
                    .map(|c| view! { <p class="text-sm text-gray-500 italic">{c}</p> })}
                <p class="text-gray-600 leading-relaxed">{project.description}</p>
                <ul class="space-y-1 text-sm text-gray-600">
                    {project
                        .features
                        .iter()
                        .map(|f| view! { <li>"• " {*f}</li> })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mt-auto">
                    {project
                        .technologies
                        .iter()
                        .map(|t| {
                            view! {
                                <span class="px-3 py-1 bg-gray-100 text-gray-700 rounded-full text-xs font-medium">
                                    {*t}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class=format!(
                        "inline-flex items-center justify-center px-6 py-2 bg-gradient-to-r {} text-white rounded-full font-semibold hover:shadow-lg transition-shadow",
                        project.accent.gradient(),
                    )
                >
                    "View Project"
                </a>
            </div>
        </article>
    }
}
