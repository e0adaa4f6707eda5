use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_prefers_reduced_motion,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};
use wasm_bindgen::{JsCast, JsValue};

use crate::nav::SectionId;
use crate::scroll::{
    scroll_target, FrameGate, ScrollMotion, ScrollTracker, SectionRect, HEADER_HEIGHT,
};
use crate::scroll_lock::{ScrollHost, ScrollLock};
use crate::typewriter::{Typewriter, TypewriterConfig};
use crate::visibility::VisibilityLatch;

/// Shared, read-only view of the page scroll state.
#[derive(Debug, Clone, Copy)]
pub struct ScrollContext {
    pub offset: Signal<f64>,
    pub active: Signal<Option<SectionId>>,
}

fn current_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

fn read_section_rects(sections: &[SectionId]) -> Vec<SectionRect> {
    let document = document();
    sections
        .iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id.dom_id())?.get_bounding_client_rect();
            Some(SectionRect {
                id: *id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

/// Tracks the scroll offset and the active section, recomputing at most once per frame.
///
/// Samples taken while `lock` is held are ignored: the pinned body reports offset 0.
pub fn use_scroll_tracker(
    sections: &'static [SectionId],
    lock: PageScrollLock,
) -> ScrollContext {
    let tracker = RwSignal::new(ScrollTracker::new());
    let gate = StoredValue::new(FrameGate::default());
    let lock = StoredValue::new(lock);

    let sample = move || {
        let locked = lock.try_with_value(|l| l.is_locked()).unwrap_or(false);
        let rects = read_section_rects(sections);
        let offset = current_offset();
        tracker.try_update(|t| {
            t.set_frozen(locked);
            if t.sample(offset, &rects) {
                log::debug!("active section: {:?}", t.active());
            }
        });
    };

    let on_event = move || {
        if gate.try_update_value(|g| g.request()).unwrap_or(false) {
            request_animation_frame(move || {
                gate.try_update_value(|g| g.on_frame());
                sample();
            });
        }
    };

    Effect::new(move |_| {
        sample();
        let scroll = window_event_listener(ev::scroll, move |_| on_event());
        let resize = window_event_listener(ev::resize, move |_| on_event());
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    });

    let offset = Memo::new(move |_| tracker.with(|t| t.offset()));
    let active = Memo::new(move |_| tracker.with(|t| t.active()));
    ScrollContext {
        offset: offset.into(),
        active: active.into(),
    }
}

pub fn use_scroll_context() -> ScrollContext {
    expect_context::<ScrollContext>()
}

/// The user's `prefers-reduced-motion` setting, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct MotionPreference(pub Signal<bool>);

pub fn provide_motion_preference() {
    provide_context(MotionPreference(use_prefers_reduced_motion()));
}

pub fn use_reduced_motion() -> Signal<bool> {
    use_context::<MotionPreference>()
        .map(|MotionPreference(reduce)| reduce)
        .unwrap_or_else(|| Signal::stored(false))
}

fn smooth_scroll_supported() -> bool {
    document()
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| {
            js_sys::Reflect::has(&el.style(), &JsValue::from_str("scrollBehavior"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

fn scroll_window_to(top: f64, motion: ScrollMotion) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(match motion {
        ScrollMotion::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollMotion::Instant => web_sys::ScrollBehavior::Instant,
    });
    window().scroll_to_with_scroll_to_options(&options);
}

/// Scrolls so the section sits just below the fixed header. Fire and forget:
/// the scroll tracker picks up the new active section on its own.
pub fn scroll_to_section(id: SectionId, reduce_motion: bool) {
    let Some(el) = document().get_element_by_id(id.dom_id()) else {
        log::warn!("no section with id #{}", id.dom_id());
        return;
    };
    let target = scroll_target(
        el.get_bounding_client_rect().top(),
        current_offset(),
        HEADER_HEIGHT,
    );
    let supported = smooth_scroll_supported();
    if !supported {
        log::debug!("smooth scrolling unsupported, jumping to {target}");
    }
    scroll_window_to(target, ScrollMotion::for_navigation(supported, reduce_motion));
}

/// One-shot "has been seen" flag for an element.
pub fn use_visibility_trigger(target: NodeRef<html::Div>, threshold: f64) -> Signal<bool> {
    let latch = RwSignal::new(VisibilityLatch::new(threshold));

    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let ratio = entries
                .iter()
                .filter(|e| e.is_intersecting())
                .map(|e| e.intersection_ratio())
                .fold(0.0, f64::max);
            latch.maybe_update(|l| l.observe(ratio));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    let visible = Memo::new(move |_| latch.with(|l| l.is_visible()));

    Effect::new(move |_| {
        if !is_supported.get() {
            log::debug!("IntersectionObserver unsupported, showing section immediately");
            latch.update(|l| l.force());
        }
    });
    Effect::new(move |_| {
        if visible.get() {
            stop();
        }
    });

    visible.into()
}

fn schedule_tick(
    engine: StoredValue<Typewriter>,
    text: RwSignal<String>,
    pending: StoredValue<Option<TimeoutHandle>>,
    delay: Duration,
) {
    let handle = set_timeout_with_handle(
        move || {
            let Some((next, revealed)) = engine.try_update_value(|e| {
                let next = e.tick();
                (next, e.revealed_text().to_string())
            }) else {
                return;
            };
            text.try_set(revealed);
            schedule_tick(engine, text, pending, next);
        },
        delay,
    );
    match handle {
        Ok(h) => {
            pending.try_update_value(|p| *p = Some(h));
        }
        Err(e) => log::warn!("typewriter timer failed: {e:?}"),
    }
}

/// Text that types itself out, pauses, erases and starts over.
pub fn use_typewriter(source: Signal<String>, config: TypewriterConfig) -> Signal<String> {
    let engine = StoredValue::new(Typewriter::new(source.get_untracked(), config));
    let text = RwSignal::new(String::new());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    Effect::watch(
        move || source.get(),
        move |src, prev, _| {
            let reset = engine
                .try_update_value(|e| e.set_source(src.clone()))
                .unwrap_or(false);
            if prev.is_some() && !reset {
                return;
            }
            if let Some(h) = pending.with_value(|p| *p) {
                h.clear();
            }
            text.set(String::new());
            let delay = engine.with_value(|e| e.start_delay());
            schedule_tick(engine, text, pending, delay);
        },
        true,
    );

    on_cleanup(move || {
        if let Some(Some(h)) = pending.try_with_value(|p| *p) {
            h.clear();
        }
    });

    text.into()
}

/// Runs `on_escape` whenever Escape is pressed while the calling component is mounted.
pub fn use_escape(on_escape: impl Fn() + Clone + 'static) {
    Effect::new(move |_| {
        let on_escape = on_escape.clone();
        let handle = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                on_escape();
            }
        });
        on_cleanup(move || handle.remove());
    });
}

/// Locks scrolling by pinning `<body>` in place at the current offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollHost;

impl ScrollHost for BodyScrollHost {
    fn scroll_offset(&self) -> f64 {
        current_offset()
    }

    fn lock(&self, offset: f64) {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{offset}px"));
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("overflow", "hidden");
    }

    fn unlock(&self, offset: f64) {
        if let Some(body) = document().body() {
            let style = body.style();
            for property in ["position", "top", "width", "overflow"] {
                let _ = style.remove_property(property);
            }
        }
        scroll_window_to(offset, ScrollMotion::RESTORE);
    }
}

pub type PageScrollLock = ScrollLock<BodyScrollHost>;
