use leptos::{ev::MouseEvent, html, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::{use_escape, use_reduced_motion, PageScrollLock};
use super::reveal::Reveal;
use crate::skills::{card_tilt, CardBounds, SkillEntry, SkillSelection, Tilt, SKILLS};

#[component]
pub fn SkillGallery() -> impl IntoView {
    let selection = RwSignal::new(SkillSelection::default());

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(index, skill)| {
                    view! {
                        <Reveal delay_ms={index as u32 * 75}>
                            <SkillCard skill index selection />
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
        {move || {
            selection
                .with(|s| s.selected())
                .map(|skill| {
                    view! { <SkillModal skill on_close=move |_| selection.update(|s| s.clear()) /> }
                })
        }}
    }
}

#[component]
fn SkillCard(
    skill: &'static SkillEntry,
    index: usize,
    selection: RwSignal<SkillSelection>,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Button>::new();
    let (tilt, set_tilt) = signal(Tilt::default());
    let reduce_motion = use_reduced_motion();
    let is_selected = move || selection.with(|s| s.selected_index() == Some(index));

    let on_move = move |ev: MouseEvent| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let bounds = CardBounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        set_tilt.set(card_tilt(
            ev.client_x() as f64,
            ev.client_y() as f64,
            bounds,
            reduce_motion.get_untracked(),
        ));
    };

    view! {
        <button
            node_ref=card_ref
            type="button"
            class=format!(
                "w-full h-full text-left p-6 rounded-lg border border-{}/30 bg-brightBlack/20 hover:bg-brightBlack/40 transition-colors duration-200 will-change-transform",
                skill.theme,
            )
            style:transform=move || tilt.get().to_css()
            aria-haspopup="dialog"
            aria-pressed=move || is_selected().to_string()
            on:mousemove=on_move
            on:mouseleave=move |_| set_tilt.set(Tilt::default())
            on:click=move |_| selection.update(|s| s.toggle(index))
        >
            <i class=format!("{} text-4xl text-{}", skill.icon, skill.theme) aria-hidden="true" />
            <h4 class="text-xl font-bold mt-4 mb-2">{skill.name}</h4>
            <p class="text-sm text-muted">{skill.summary}</p>
        </button>
    }
}

/// Detail overlay for one skill. Holds the page scroll lock for as long as it is mounted.
#[component]
fn SkillModal(skill: &'static SkillEntry, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let lock = expect_context::<PageScrollLock>();
    let guard = StoredValue::new(Some(lock.acquire()));
    let content_ref = NodeRef::<html::Div>::new();
    log::debug!("opened skill detail: {}", skill.name);

    on_cleanup(move || {
        guard.try_update_value(|g| {
            g.take();
        });
    });
    use_escape(move || on_close.run(()));

    let on_overlay_click = move |ev: MouseEvent| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .zip(content_ref.get_untracked())
            .is_some_and(|(node, content)| content.contains(Some(&node)));
        if !inside {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm"
            on:click=on_overlay_click
        >
            <div
                node_ref=content_ref
                role="dialog"
                aria-modal="true"
                aria-labelledby="skill_modal_title"
                class=format!(
                    "relative w-full max-w-2xl max-h-[85vh] overflow-y-auto p-8 rounded-lg bg-background border border-{}/40 shadow-2xl",
                    skill.theme,
                )
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 text-muted hover:text-foreground text-xl"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <div class="flex items-center gap-4 mb-4">
                    <i class=format!("{} text-5xl text-{}", skill.icon, skill.theme) aria-hidden="true" />
                    <h3 id="skill_modal_title" class="text-2xl font-bold">
                        {skill.name}
                    </h3>
                </div>
                <p class="text-base mb-6 leading-relaxed">{skill.summary}</p>
                <div class="space-y-4">
                    {skill
                        .sections
                        .iter()
                        .map(|section| {
                            view! {
                                <div class="bg-brightBlack/30 p-4 rounded-md">
                                    <h4 class=format!("font-bold mb-1 text-{}", skill.theme)>
                                        {section.title}
                                    </h4>
                                    <p class="text-sm">{section.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
