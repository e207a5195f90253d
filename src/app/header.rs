use leptos::{html, prelude::*};
use leptos_use::{on_click_outside, use_window_scroll, use_window_size, UseWindowSizeReturn};
use wasm_bindgen::JsCast;

use crate::content::{nav_anchor, NAV_ITEMS, PROFILE, SOCIAL_LINKS};
use crate::drawer::{
    header_is_condensed, Drawer, DrawerEvent, DrawerState, ScrollLockHost,
};
use crate::motion::{TimelineStep, HEADER};

use super::reveal::use_page_load;

/// Page scrolling, controlled through `overflow` on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
struct BodyOverflow;

impl BodyOverflow {
    fn set(value: Option<&str>) {
        let body = if let Some(body) = document().body() {
            body
        } else {
            log::warn!("no <body> to toggle scrolling on");
            return;
        };
        let style = body.style();
        let res = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if let Err(e) = res {
            log::warn!("couldn't update body overflow: {e:?}");
        }
    }
}

impl ScrollLockHost for BodyOverflow {
    fn lock(&self) {
        Self::set(Some("hidden"));
    }

    fn unlock(&self) {
        Self::set(None);
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let drawer = StoredValue::new(Drawer::new(BodyOverflow));
    let (state, set_state) = signal(DrawerState::Closed);
    let drawer_ref = NodeRef::<html::Div>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    let dispatch = move |event: DrawerEvent| {
        let next = drawer
            .try_update_value(|d| d.dispatch(event))
            .unwrap_or_default();
        set_state.set(next);
    };

    // the lock must not outlive the header
    on_cleanup(move || {
        drawer.try_update_value(|d| d.release());
    });

    let UseWindowSizeReturn { width, .. } = use_window_size();
    Effect::watch(
        move || width.get(),
        move |width, _, _| dispatch(DrawerEvent::ViewportResized { width: *width }),
        false,
    );

    let _ = on_click_outside(drawer_ref, move |ev| {
        if !state.get_untracked().is_open() {
            return;
        }
        // the toggle handles its own clicks
        let on_toggle = toggle_ref
            .get_untracked()
            .zip(ev.target())
            .map(|(button, target)| button.contains(target.dyn_ref::<web_sys::Node>()))
            .unwrap_or(false);
        if !on_toggle {
            dispatch(DrawerEvent::OutsideClick);
        }
    });

    let (_, scroll_y) = use_window_scroll();
    let condensed = Memo::new(move |_| header_is_condensed(scroll_y.get()));

    let loaded = use_page_load();
    let entrance = TimelineStep {
        spec: HEADER,
        delay_ms: 0,
    };

    let is_open = move || state.get().is_open();

    view! {
        <header
            class=move || {
                if condensed.get() {
                    "header fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-white/95 backdrop-blur-md shadow-lg py-3 md:py-4"
                } else {
                    "header fixed top-0 left-0 w-full z-50 transition-all duration-300 bg-transparent py-4 md:py-6"
                }
            }
            style=move || entrance.style(loaded.get(), 0)
        >
            <div class="container mx-auto px-4 sm:px-6">
                <nav class="flex justify-between items-center">
                    <div class="logo">
                        <span class="text-2xl font-bold bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
                            {PROFILE.initials}
                        </span>
                    </div>
                    <ul class="hidden md:flex space-x-6 lg:space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a
                                            href=nav_anchor(item)
                                            class="text-dark font-medium hover:text-primary transition-colors duration-300 relative group text-sm lg:text-base"
                                        >
                                            {*item}
                                            <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-primary to-secondary transition-all duration-300 group-hover:w-full"></span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        node_ref=toggle_ref
                        class="md:hidden flex flex-col space-y-1 p-2 rounded-lg hover:bg-gray-100 transition-colors duration-200"
                        on:click=move |_| dispatch(DrawerEvent::Toggle)
                        aria-label="Toggle menu"
                        aria-controls="mobile-drawer"
                        aria-expanded=move || is_open().to_string()
                    >
                        <span class=move || {
                            if is_open() {
                                "w-6 h-0.5 bg-dark transition-all duration-300 rotate-45 translate-y-1.5"
                            } else {
                                "w-6 h-0.5 bg-dark transition-all duration-300"
                            }
                        }></span>
                        <span class=move || {
                            if is_open() {
                                "w-6 h-0.5 bg-dark transition-all duration-300 opacity-0"
                            } else {
                                "w-6 h-0.5 bg-dark transition-all duration-300 opacity-100"
                            }
                        }></span>
                        <span class=move || {
                            if is_open() {
                                "w-6 h-0.5 bg-dark transition-all duration-300 -rotate-45 -translate-y-1.5"
                            } else {
                                "w-6 h-0.5 bg-dark transition-all duration-300"
                            }
                        }></span>
                    </button>
                </nav>

                <div
                    node_ref=drawer_ref
                    id="mobile-drawer"
                    class=move || {
                        if is_open() {
                            "md:hidden absolute top-full left-0 w-full bg-white/95 backdrop-blur-md shadow-xl transition-all duration-300 ease-out z-50 opacity-100 visible translate-y-0 max-h-screen"
                        } else {
                            "md:hidden absolute top-full left-0 w-full bg-white/95 backdrop-blur-md shadow-xl transition-all duration-300 ease-out z-50 opacity-0 invisible -translate-y-4 max-h-0"
                        }
                    }
                    style=move || {
                        if is_open() {
                            "height: calc(100vh - 80px); overflow: hidden;"
                        } else {
                            "height: 0; overflow: hidden;"
                        }
                    }
                >
                    <ul class="py-6 space-y-2 px-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a
                                            href=nav_anchor(item)
                                            class="block px-4 py-3 text-dark font-medium hover:text-primary hover:bg-gray-50 rounded-lg transition-all duration-300 text-lg"
                                            on:click=move |_| dispatch(DrawerEvent::LinkSelected)
                                        >
                                            {*item}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="px-4 py-6 border-t border-gray-200">
                        <div class="flex justify-center space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                            class="w-10 h-10 bg-gray-100 rounded-full flex items-center justify-center text-dark hover:bg-primary hover:text-white transition-all duration-300"
                                            on:click=move |_| dispatch(DrawerEvent::LinkSelected)
                                        >
                                            <span class="text-sm font-medium">{social.initials}</span>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </header>
        // outside the header: its entrance transform would trap a fixed overlay
        <Show when=is_open>
            <div
                class="md:hidden fixed inset-0 bg-black/20 backdrop-blur-sm z-40 top-0"
                on:click=move |_| dispatch(DrawerEvent::OutsideClick)
            ></div>
        </Show>
    }
}
