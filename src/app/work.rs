use leptos::prelude::*;

use super::reveal::Reveal;
use crate::nav::SectionId;

struct Project {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    repo: &'static str,
    live: Option<&'static str>,
}

static PROJECT: Project = Project {
    title: "Trailhead",
    description: "A trip planner that pulls trail conditions, weather and permit availability into one shareable itinerary. Server-rendered Rust with a hydrated WebAssembly front end, offline support and sub-second loads on slow connections.",
    tags: &["Rust", "Leptos", "Axum", "PostgreSQL", "Tailwind"],
    repo: "https://github.com/",
    live: None,
};

#[component]
pub fn SelectedWork() -> impl IntoView {
    let project = &PROJECT;
    view! {
        <section id=SectionId::Work.dom_id() class="py-24 px-4 max-w-6xl mx-auto">
            <Reveal>
                <h2 class="text-3xl font-bold mb-12 text-center">"Selected work"</h2>
            </Reveal>
            <Reveal delay_ms=100>
                <article class="grid md:grid-cols-5 gap-8 p-6 rounded-lg bg-brightBlack/20 border border-muted/30">
                    <div class="md:col-span-2 rounded-md bg-gradient-to-br from-cyan/30 to-purple/30 min-h-48 flex items-center justify-center text-5xl">
                        <span aria-hidden="true">"⛰"</span>
                    </div>
                    <div class="md:col-span-3">
                        <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                        <p class="text-base mb-6 leading-relaxed">{project.description}</p>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class="rounded-md px-2 py-1 bg-brightBlack text-sm">
                                            {*tag}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex gap-4">
                            <a
                                href=project.repo
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-cyan hover:underline"
                            >
                                <i class="devicon-github-plain mr-2" />
                                "Source"
                            </a>
                            {project
                                .live
                                .map(|href| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-green hover:underline"
                                        >
                                            "Live demo ↗"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </article>
            </Reveal>
        </section>
    }
}
