use leptos::prelude::*;

use super::reveal::Reveal;
use super::skills::SkillGallery;
use crate::nav::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.dom_id() class="py-24 px-4 max-w-6xl mx-auto">
            <Reveal>
                <h2 class="text-3xl font-bold mb-8 text-center">"About me"</h2>
            </Reveal>
            <div class="grid md:grid-cols-2 gap-8 lg:gap-12">
                <Reveal delay_ms=100>
                    <p class="text-base mb-4 leading-relaxed">
                        "I build web products end to end: the API, the database behind it, and the interface people actually touch. "
                        "Most of my recent work is in Rust and TypeScript."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "I care about software that is "<strong>"fast"</strong>", "
                        <strong>"accessible"</strong>" and "<strong>"easy to change"</strong>
                        ". Small, well-tested pieces beat clever ones."
                    </p>
                </Reveal>
                <Reveal delay_ms=200>
                    <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple">
                        <p class="text-sm text-purple mb-2 font-medium">"What I'm up to"</p>
                        <ul class="text-sm space-y-1">
                            <li>"Shipping WebAssembly front ends"</li>
                            <li>"Designing APIs that are pleasant to consume"</li>
                            <li>"Mentoring developers new to Rust"</li>
                        </ul>
                    </div>
                </Reveal>
            </div>
            <Reveal class="mt-16">
                <h3 class="text-2xl font-bold mb-2 text-center">"Skills"</h3>
                <p class="text-center text-muted mb-8">"Select a card for details."</p>
            </Reveal>
            <SkillGallery />
        </section>
    }
}
