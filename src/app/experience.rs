use leptos::{html, prelude::*};

use crate::content::{EXPERIENCE, FOCUS_AREAS};
use crate::motion::EXPERIENCE_CARD;

use super::reveal::{use_reveal, RevealSection};

#[component]
pub fn Experience() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let phase = use_reveal(grid_ref, EXPERIENCE_CARD.trigger);

    view! {
        <RevealSection id="experience" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="section-title">"Experience"</h2>
                    <p class="section-subtitle">
                        "My professional journey and the skills I've acquired along the way."
                    </p>
                </div>

                <div node_ref=grid_ref class="max-w-6xl mx-auto">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            view! {
                                <div
                                    class="bg-gradient-to-br from-dark to-darker text-white rounded-3xl p-8 shadow-2xl mb-12"
                                    style=move || EXPERIENCE_CARD.style(phase.get(), i)
                                >
                                    <div class="flex flex-col lg:flex-row lg:items-start lg:justify-between mb-6">
                                        <div class="flex items-start mb-4 lg:mb-0">
                                            <div class="w-16 h-16 bg-gradient-to-r from-primary to-secondary rounded-2xl flex items-center justify-center text-white text-2xl mr-6">
                                                "💼"
                                            </div>
                                            <div>
                                                <h3 class="text-2xl font-bold mb-2">{exp.title}</h3>
                                                <p class="text-xl text-primary font-semibold">
                                                    {exp.company}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="bg-primary/20 text-primary px-4 py-2 rounded-full font-semibold">
                                            {exp.duration}
                                        </div>
                                    </div>
                                    <div class="mb-6">
                                        <h4 class="text-lg font-semibold mb-4 text-gray-300">
                                            "Key Responsibilities:"
                                        </h4>
                                        <ul class="space-y-3">
                                            {exp
                                                .responsibilities
                                                .iter()
                                                .map(|resp| {
                                                    view! {
                                                        <li class="flex items-start">
                                                            <span class="text-primary mr-3 mt-1">"▸"</span>
                                                            <span class="text-gray-300">{*resp}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                    <div>
                                        <h4 class="text-lg font-semibold mb-4 text-gray-300">
                                            "Technologies Used:"
                                        </h4>
                                        <div class="flex flex-wrap gap-3">
                                            {exp
                                                .technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <span class="px-4 py-2 bg-white/10 rounded-full text-white border border-white/20 hover:bg-white/20 transition-all duration-300">
                                                            {*tech}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {FOCUS_AREAS
                        .iter()
                        .map(|area| {
                            view! {
                                <div class="bg-light rounded-2xl p-6 text-center hover:shadow-xl transition-all duration-300 card-hover group">
                                    <div class="w-16 h-16 bg-gradient-to-r from-primary to-secondary rounded-2xl flex items-center justify-center text-white text-2xl mx-auto mb-4 group-hover:scale-110 transition-transform duration-300">
                                        {area.icon}
                                    </div>
                                    <h3 class="text-xl font-bold text-dark mb-3">{area.title}</h3>
                                    <p class="text-gray-600 leading-relaxed">{area.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
