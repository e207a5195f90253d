use leptos::{either::Either, html, prelude::*};

use crate::content::{Project, PROFILE, PROJECTS};
use crate::motion::{RevealPhase, PROJECT_CARD};
use crate::showcase::Showcase;

use super::reveal::{play_after_paint, use_reveal, RevealSection};

#[component]
pub fn Projects() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let grid_phase = use_reveal(grid_ref, PROJECT_CARD.trigger);
    let (showcase, set_showcase) = signal(Showcase::default());
    let (extra_phase, set_extra_phase) = signal(RevealPhase::Static);

    view! {
        <RevealSection id="projects" class="py-20 bg-light">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="section-title">"My Projects"</h2>
                    <p class="section-subtitle">
                        "Here are some of my recent projects that showcase my skills and creativity."
                    </p>
                </div>

                <div node_ref=grid_ref class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        showcase
                            .get()
                            .visible(&PROJECTS)
                            .iter()
                            .enumerate()
                            .map(|(i, project)| {
                                let (phase, index) = match Showcase::entrance_index(i) {
                                    Some(extra) => (Signal::from(extra_phase), extra),
                                    None => (grid_phase, i),
                                };
                                view! { <ProjectCard project=*project index phase /> }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="text-center mt-12">
                    <button
                        class="btn-outline border-primary text-primary hover:bg-primary hover:text-white mx-auto"
                        aria-controls="projects"
                        aria-expanded=move || showcase.get().shows_all().to_string()
                        on:click=move |_| {
                            set_showcase.update(|s| s.toggle());
                            if showcase.get_untracked().shows_all() {
                                play_after_paint(set_extra_phase);
                            }
                        }
                    >
                        {move || if showcase.get().shows_all() { "▲" } else { "▼" }}
                        {move || showcase.get().label(PROJECTS.len())}
                    </button>
                </div>

                <div class="text-center mt-16">
                    <div class="bg-white rounded-2xl p-8 shadow-lg border border-gray-100">
                        <h3 class="text-2xl font-bold text-dark mb-4">"Like What You See?"</h3>
                        <p class="text-gray-600 mb-6 max-w-2xl mx-auto">
                            "I'm passionate about creating amazing web experiences. Let's work together to bring your ideas to life!"
                        </p>
                        <div class="flex flex-wrap justify-center gap-4">
                            <a
                                href=PROFILE.github
                                class="btn-primary"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <i class="devicon-github-plain"></i>
                                "View GitHub Profile"
                            </a>
                            <a
                                href="#contact"
                                class="btn-outline border-primary text-primary hover:bg-primary hover:text-white"
                            >
                                "Get In Touch"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, phase: Signal<RevealPhase>) -> impl IntoView {
    let demo = if project.has_live_demo() {
        Either::Left(view! {
            <a
                href=project.live_link
                target="_blank"
                rel="noopener noreferrer"
                class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-primary to-secondary text-white rounded-full text-sm font-medium hover:shadow-lg transition-all duration-300 flex-1 justify-center"
            >
                "↗ Live Demo"
            </a>
        })
    } else {
        Either::Right(view! {
            <span class="flex items-center gap-2 px-4 py-2 bg-gray-200 text-gray-500 rounded-full text-sm font-medium flex-1 justify-center cursor-not-allowed">
                "Demo Unavailable"
            </span>
        })
    };

    view! {
        <div
            class="bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl group h-full flex flex-col"
            style=move || PROJECT_CARD.style(phase.get(), index)
        >
            <div class="h-48 bg-gradient-to-br from-primary to-secondary relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover opacity-90 group-hover:scale-110 transition-transform duration-500"
                />
                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/40 transition-all duration-300"></div>
            </div>

            <div class="p-6 flex-1 flex flex-col">
                <h3 class="text-xl font-bold text-dark mb-3 group-hover:text-primary transition-colors duration-300">
                    {project.title}
                </h3>
                <p class="text-gray-600 mb-4 leading-relaxed flex-1">{project.description}</p>

                <div class="mb-4">
                    <h4 class="font-semibold text-dark mb-2 text-sm">"Key Features:"</h4>
                    <ul class="space-y-1">
                        {project
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <li class="flex items-center text-sm text-gray-600">
                                        <span class="w-2 h-2 bg-primary rounded-full mr-2 flex-shrink-0"></span>
                                        <span class="text-xs">{*feature}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="mb-6 flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-primary/10 text-primary rounded-full text-xs font-medium">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-3 mt-auto">
                    {demo}
                    <a
                        href=project.source_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-4 py-2 border border-gray-300 text-gray-700 rounded-full text-sm font-medium hover:bg-gray-50 transition-all duration-300 flex-1 justify-center"
                    >
                        <i class="devicon-github-plain"></i>
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
