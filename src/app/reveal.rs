use leptos::{html, prelude::*};

use super::hooks::use_visibility_trigger;
use crate::visibility::DEFAULT_THRESHOLD;

/// Plays the entrance animation of its children the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_visibility_trigger(node_ref, threshold);

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            class:reveal-visible=move || visible.get()
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
