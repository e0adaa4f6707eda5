use std::time::Duration;

use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_media_query;

use super::hooks::{scroll_to_section, use_escape, use_reduced_motion, use_scroll_context};
use crate::nav::{Density, NavigationItem, SectionId, NAV_ITEMS};

/// Lets the mobile menu finish its close animation after a link is tapped.
const MENU_CLOSE_DELAY: Duration = Duration::from_millis(150);

#[component]
pub fn Header() -> impl IntoView {
    let scroll = use_scroll_context();
    let density = Memo::new(move |_| Density::from_offset(scroll.offset.get()));
    let (menu_open, set_menu_open) = signal(false);
    let is_narrow = use_media_query("(max-width: 767px)");
    let reduce_motion = use_reduced_motion();
    let close_timer = StoredValue::new(None::<TimeoutHandle>);

    use_escape(move || set_menu_open.set(false));
    on_cleanup(move || {
        if let Some(Some(h)) = close_timer.try_with_value(|t| *t) {
            h.clear();
        }
    });

    let close_menu_later = move || {
        if let Some(h) = close_timer.with_value(|t| *t) {
            h.clear();
        }
        match set_timeout_with_handle(
            move || {
                set_menu_open.try_set(false);
            },
            MENU_CLOSE_DELAY,
        ) {
            Ok(h) => close_timer.update_value(|t| *t = Some(h)),
            Err(e) => {
                log::warn!("menu close timer failed: {e:?}");
                set_menu_open.set(false);
            }
        }
    };

    let on_nav = move |ev: MouseEvent, target: SectionId| {
        ev.prevent_default();
        scroll_to_section(target, reduce_motion.get_untracked());
        if is_narrow.get_untracked() {
            close_menu_later();
        }
    };

    let nav_link = move |item: &'static NavigationItem, mobile: bool| {
        let target = item.target;
        let is_active = move || item.is_active(scroll.active.get());
        let base = if mobile {
            "flex items-center gap-3 px-4 py-3 rounded-md transition-colors duration-200"
        } else {
            "flex items-center gap-2 px-3 py-2 rounded-md transition-colors duration-200"
        };
        view! {
            <a
                href=item.href()
                class=base
                class:text-cyan=is_active
                class:font-bold=is_active
                class:text-foreground=move || !is_active()
                aria-current=move || is_active().then_some("page")
                on:click=move |ev| on_nav(ev, target)
            >
                <span aria-hidden="true">{item.icon}</span>
                {item.label}
            </a>
        }
    };

    view! {
        <header class=move || {
            if density.get().is_compact() {
                "fixed top-0 inset-x-0 z-40 py-2 bg-background/90 backdrop-blur-md shadow-lg transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-40 py-5 bg-transparent transition-all duration-300"
            }
        }>
            <div class="mx-auto px-4 sm:px-6 lg:px-8 max-w-6xl flex items-center justify-between">
                <a
                    href="#home"
                    class="text-xl font-bold"
                    on:click=move |ev| on_nav(ev, SectionId::Home)
                >
                    <span class="text-green">"~/"</span>
                    <span class="text-cyan">{super::SITE_OWNER}</span>
                </a>
                <nav class="hidden md:flex items-center gap-2" aria-label="Primary">
                    {NAV_ITEMS.iter().map(|item| nav_link(item, false)).collect_view()}
                </nav>
                <button
                    type="button"
                    class="md:hidden p-2 rounded-md hover:bg-brightBlack/30"
                    aria-label="Toggle navigation menu"
                    aria-controls="mobile_menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <div
                id="mobile_menu"
                class="md:hidden overflow-hidden transition-all duration-300"
                class:max-h-0=move || !menu_open.get()
                class:max-h-96=move || menu_open.get()
            >
                <nav class="flex flex-col gap-1 px-4 py-2" aria-label="Mobile">
                    {NAV_ITEMS.iter().map(|item| nav_link(item, true)).collect_view()}
                </nav>
            </div>
        </header>
    }
}
