use leptos::{html, prelude::*};

use crate::content::{SKILL_CATEGORIES, TECHNICAL_SKILLS};
use crate::motion::{SKILL_BAR, TECH_ICON};

use super::about::SkillBar;
use super::reveal::{use_reveal, RevealSection};

#[component]
pub fn Skills() -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();
    let bars = use_reveal(content_ref, SKILL_BAR.trigger);
    let stack_ref = NodeRef::<html::Div>::new();
    let icons = use_reveal(stack_ref, TECH_ICON.trigger);

    view! {
        <RevealSection id="skills" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="section-title">"Skills & Technologies"</h2>
                    <p class="section-subtitle">
                        "The tools and technologies I use to bring ideas to life."
                    </p>
                </div>

                <div node_ref=content_ref class="grid lg:grid-cols-2 gap-12 mb-16">
                    <div>
                        <h3 class="text-2xl font-bold text-dark mb-8">"Technical Proficiency"</h3>
                        <div class="space-y-6">
                            {TECHNICAL_SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| view! { <SkillBar skill=*skill index=i phase=bars /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div node_ref=stack_ref>
                        <h3 class="text-2xl font-bold text-dark mb-8">"Tech Stack"</h3>
                        <div class="grid grid-cols-4 gap-6">
                            {TECHNICAL_SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <div
                                            class="flex flex-col items-center p-4 bg-light rounded-2xl hover:shadow-lg group"
                                            style=move || TECH_ICON.style(icons.get(), i)
                                        >
                                            <div class="text-4xl text-primary mb-2 group-hover:scale-110 transition-transform duration-300">
                                                <i class=skill.icon.unwrap_or("devicon-devicon-plain")></i>
                                            </div>
                                            <span class="text-sm font-medium text-gray-700 text-center">
                                                {skill.name}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="bg-gradient-to-br from-dark to-darker text-white rounded-2xl p-6 hover:shadow-xl transition-all duration-300 card-hover">
                                    <div class="flex items-center mb-4">
                                        <div class="w-12 h-12 bg-gradient-to-r from-primary to-secondary rounded-xl flex items-center justify-center text-white text-xl mr-4">
                                            {category.icon}
                                        </div>
                                        <h3 class="text-xl font-bold">{category.title}</h3>
                                    </div>
                                    <div class="flex flex-wrap gap-2">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 bg-white/10 rounded-full text-sm border border-white/20 hover:bg-white/20 transition-all duration-300">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
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
