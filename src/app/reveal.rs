use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{RevealPhase, Trigger, SECTION};

/// Tracks where `target` sits relative to `trigger`.
///
/// Stays [`RevealPhase::Static`] until the browser can measure intersections,
/// so server-rendered markup and browsers without IntersectionObserver show
/// everything.
pub fn use_reveal(target: NodeRef<html::Div>, trigger: Trigger) -> Signal<RevealPhase> {
    let (observed, set_observed) = signal(RevealPhase::Hidden);

    let UseIntersectionObserverReturn { is_supported, .. } =
        use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let entry = if let Some(entry) = entries.last() {
                    entry
                } else {
                    return;
                };
                let viewport = window()
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or_default();
                let is_intersecting = entry.is_intersecting();
                let top = entry.bounding_client_rect().top();
                set_observed.update(|phase| {
                    *phase = phase.observe(trigger, is_intersecting, top, viewport)
                });
            },
            UseIntersectionObserverOptions::default().root_margin(trigger.root_margin()),
        );

    Signal::derive(move || {
        if is_supported.get() {
            observed.get()
        } else {
            RevealPhase::Static
        }
    })
}

/// One-shot phase for animations that play when the page loads.
pub fn use_page_load() -> ReadSignal<RevealPhase> {
    let (phase, set_phase) = signal(RevealPhase::Static);
    // effects only run in the browser
    Effect::new(move |_| play_after_paint(set_phase));
    phase
}

/// Puts `phase` in its hidden pose and moves it to shown once that pose has
/// painted, so the transition between the two runs.
pub fn play_after_paint(phase: WriteSignal<RevealPhase>) {
    phase.set(RevealPhase::Hidden);
    request_animation_frame(move || {
        request_animation_frame(move || phase.set(RevealPhase::Shown));
    });
}

/// A page section that fades and slides in as it scrolls into view.
#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] inner_class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let phase = use_reveal(target, SECTION.trigger);
    view! {
        <section id=id class=class>
            <div
                node_ref=target
                class=inner_class
                style=move || SECTION.style(phase.get(), 0)
            >
                {children()}
            </div>
        </section>
    }
}
