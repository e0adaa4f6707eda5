use leptos::prelude::*;

use super::hooks::{scroll_to_section, use_reduced_motion};
use crate::config::build_year;
use crate::nav::SectionId;

#[component]
pub fn Footer() -> impl IntoView {
    let reduce_motion = use_reduced_motion();
    let year = build_year().map(|y| format!("© {y} ")).unwrap_or_default();

    view! {
        <footer class="border-t border-muted/30 py-8 px-4">
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-4 text-sm">
                <p class="text-muted">{year}{super::SITE_OWNER}". Built with Rust and Leptos."</p>
                <div class="flex items-center gap-4">
                    <a
                        href="https://github.com/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-2xl hover:text-brightWhite"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href="https://linkedin.com/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-2xl text-blue hover:text-brightBlue"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <button
                        type="button"
                        class="px-3 py-1 rounded-md border border-muted/30 hover:bg-brightBlack/30"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_section(SectionId::Home, reduce_motion.get_untracked())
                    >
                        "↑ Top"
                    </button>
                </div>
            </div>
        </footer>
    }
}
