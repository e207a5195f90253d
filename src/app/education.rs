use leptos::{html, prelude::*};

use crate::content::EDUCATION;
use crate::motion::EDUCATION_ITEM;

use super::reveal::{use_reveal, RevealSection};

#[component]
pub fn Education() -> impl IntoView {
    let timeline_ref = NodeRef::<html::Div>::new();
    let phase = use_reveal(timeline_ref, EDUCATION_ITEM.trigger);
    let last = EDUCATION.len() - 1;

    view! {
        <RevealSection id="education" class="py-20 bg-light">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="section-title">"Education"</h2>
                    <p class="section-subtitle">
                        "My academic journey and qualifications that shaped my technical expertise."
                    </p>
                </div>

                <div node_ref=timeline_ref class="max-w-4xl mx-auto">
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(i, edu)| {
                            view! {
                                <div
                                    class="relative mb-12 last:mb-0"
                                    style=move || EDUCATION_ITEM.style(phase.get(), i)
                                >
                                    {(i != last)
                                        .then(|| {
                                            view! {
                                                <div class="absolute left-6 top-16 w-0.5 h-full bg-gradient-to-b from-primary to-secondary"></div>
                                            }
                                        })}
                                    <div class="flex items-start">
                                        <div class="flex-shrink-0 w-12 h-12 bg-gradient-to-r from-primary to-secondary rounded-full flex items-center justify-center text-white text-xl mr-6 relative z-10">
                                            "🎓"
                                        </div>
                                        <div class="bg-white rounded-2xl p-8 shadow-lg hover:shadow-xl flex-1 card-hover">
                                            <div class="flex flex-wrap justify-between items-start mb-4">
                                                <div>
                                                    <h3 class="text-xl font-bold text-dark mb-2">
                                                        {edu.degree}
                                                    </h3>
                                                    <p class="text-primary font-semibold text-lg">
                                                        {edu.institution}
                                                    </p>
                                                </div>
                                                <div class="text-right">
                                                    <span class="inline-block bg-primary/10 text-primary px-3 py-1 rounded-full text-sm font-medium mb-2">
                                                        {edu.duration}
                                                    </span>
                                                    <p class="text-gray-600 font-semibold">{edu.score}</p>
                                                </div>
                                            </div>
                                            <p class="text-gray-600 leading-relaxed">{edu.description}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
