use leptos::prelude::*;

use super::hooks::{scroll_to_section, use_reduced_motion, use_typewriter};
use super::reveal::Reveal;
use crate::nav::SectionId;
use crate::typewriter::TypewriterConfig;

const ROLE: &str = "Full-stack developer building fast, friendly web apps.";

#[component]
pub fn Hero() -> impl IntoView {
    let role = use_typewriter(
        Signal::derive(|| ROLE.to_string()),
        TypewriterConfig::default(),
    );
    let reduce_motion = use_reduced_motion();
    // with reduced motion the role is shown whole instead of typed out
    let shown_role = move || {
        if reduce_motion.get() {
            ROLE.to_string()
        } else {
            role.get()
        }
    };

    view! {
        <section
            id=SectionId::Home.dom_id()
            class="min-h-screen flex flex-col justify-center items-center text-center px-4 pt-24"
        >
            <Reveal class="max-w-3xl">
                <p class="text-lg text-muted mb-4">"Hi, my name is"</p>
                <h1 class="text-4xl md:text-6xl font-bold mb-6">{super::SITE_OWNER}</h1>
                <p class="text-xl md:text-2xl text-cyan min-h-[2em]" aria-label=ROLE>
                    <span aria-hidden="true">{shown_role}</span>
                    <span class="typewriter-caret" aria-hidden="true">"▍"</span>
                </p>
            </Reveal>
            <Reveal class="flex flex-col sm:flex-row gap-4 mt-10" delay_ms=200>
                <button
                    type="button"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                    on:click=move |_| scroll_to_section(SectionId::Work, reduce_motion.get_untracked())
                >
                    "View my work"
                </button>
                <button
                    type="button"
                    class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:bg-brightBlack/30 transition-all duration-200"
                    on:click=move |_| scroll_to_section(SectionId::Contact, reduce_motion.get_untracked())
                >
                    "Get in touch"
                </button>
            </Reveal>
        </section>
    }
}
