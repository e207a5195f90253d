use leptos::prelude::*;

use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::motion::hero_timeline;

use super::reveal::{use_page_load, RevealSection};

#[component]
pub fn Hero() -> impl IntoView {
    let loaded = use_page_load();
    let timeline = hero_timeline(SOCIAL_LINKS.len());
    let steps = timeline.steps();
    let (title, subtitle, description, buttons, social) =
        (steps[0], steps[1], steps[2], steps[3], steps[4]);

    view! {
        <RevealSection
            id="home"
            class="bg-gradient-to-br from-darker to-dark text-white overflow-hidden"
            inner_class="min-h-screen relative flex items-center"
        >
            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-2xl">
                    <h1
                        class="text-5xl md:text-7xl font-bold mb-4"
                        style=move || title.style(loaded.get(), 0)
                    >
                        {PROFILE.first_name}
                        " "
                        <span class="bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent">
                            {PROFILE.last_name}
                        </span>
                    </h1>
                    <h2
                        class="text-2xl md:text-3xl text-primary mb-6 font-light"
                        style=move || subtitle.style(loaded.get(), 0)
                    >
                        {PROFILE.role}
                    </h2>
                    <p
                        class="text-xl text-gray-300 mb-8 leading-relaxed"
                        style=move || description.style(loaded.get(), 0)
                    >
                        {PROFILE.tagline}
                    </p>
                    <div
                        class="flex flex-wrap gap-4 mb-12"
                        style=move || buttons.style(loaded.get(), 0)
                    >
                        <a href="#projects" class="btn-primary">
                            "View My Work"
                        </a>
                        <a
                            href=PROFILE.cv_link
                            class="btn-outline border-white text-white hover:bg-white hover:text-dark"
                            target="_blank"
                            rel="noopener noreferrer"
                            download=PROFILE.cv_file_name
                        >
                            "⬇ Download CV"
                        </a>
                    </div>
                    <div class="flex gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <a
                                        href=link.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="w-12 h-12 bg-white/10 rounded-full flex items-center justify-center text-white text-xl hover:scale-110 backdrop-blur-sm"
                                        style=move || social.style(loaded.get(), i)
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="animate-drift absolute w-64 h-64 bg-gradient-to-r from-primary to-secondary rounded-full opacity-10 top-1/4 right-1/4"></div>
                <div
                    class="animate-drift absolute w-48 h-48 bg-gradient-to-r from-secondary to-primary rounded-full opacity-10 bottom-1/4 right-1/3"
                    style="animation-delay: 200ms;"
                ></div>
                <div
                    class="animate-drift absolute w-32 h-32 bg-gradient-to-r from-primary to-secondary rounded-full opacity-10 top-1/2 left-1/3"
                    style="animation-delay: 400ms;"
                ></div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 text-center text-gray-400">
                <div class="flex flex-col items-center">
                    <div class="w-6 h-10 border-2 border-gray-400 rounded-full flex justify-center mb-2">
                        <div class="w-1 h-3 bg-gray-400 rounded-full mt-2 animate-scroll"></div>
                    </div>
                    <span class="text-sm">"Scroll Down"</span>
                </div>
            </div>
        </RevealSection>
    }
}
