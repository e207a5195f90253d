use leptos::{html, prelude::*};

use crate::content::{Skill, CORE_SKILLS, PROFILE, STATS, TECH_TAGS};
use crate::motion::{RevealPhase, SKILL_BAR, SKILL_ITEM};

use super::reveal::{use_reveal, RevealSection};

#[component]
pub fn About() -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();
    let bars = use_reveal(content_ref, SKILL_BAR.trigger);
    let tags_ref = NodeRef::<html::Div>::new();
    let tags = use_reveal(tags_ref, SKILL_ITEM.trigger);

    view! {
        <RevealSection id="about" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="section-title">"About Me"</h2>
                    <p class="section-subtitle">{PROFILE.about_summary}</p>
                </div>

                <div node_ref=content_ref class="grid lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h3 class="text-3xl font-bold text-dark mb-6">{PROFILE.greeting}</h3>
                        <div class="space-y-4 text-gray-600 text-lg leading-relaxed">
                            {PROFILE.about.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                        <div class="grid grid-cols-2 gap-6 mt-8">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-3xl font-bold text-primary mb-2">
                                                {stat.value}
                                            </div>
                                            <div class="text-gray-600">{stat.caption}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="text-2xl font-bold text-dark mb-8">"My Skills"</h4>
                        <div class="space-y-6 mb-8">
                            {CORE_SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| view! { <SkillBar skill=*skill index=i phase=bars /> })
                                .collect_view()}
                        </div>
                        <div>
                            <h5 class="text-xl font-semibold text-dark mb-4">"Technologies I Use"</h5>
                            <div node_ref=tags_ref class="flex flex-wrap gap-3">
                                {TECH_TAGS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, tech)| {
                                        view! {
                                            <span
                                                class="px-4 py-2 bg-gradient-to-r from-primary/10 to-secondary/10 text-primary rounded-full font-medium border border-primary/20 hover:scale-105"
                                                style=move || SKILL_ITEM.style(tags.get(), i)
                                            >
                                                {*tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

/// Labelled progress bar; the fill grows to the skill's level once `phase`
/// shows it.
#[component]
pub fn SkillBar(skill: Skill, index: usize, phase: Signal<RevealPhase>) -> impl IntoView {
    let percent = skill.fill_percent();
    view! {
        <div>
            <div class="flex justify-between items-center mb-2">
                <div class="flex items-center gap-3">
                    {skill.icon.map(|icon| view! { <i class=format!("{icon} text-primary text-xl")></i> })}
                    <span class="font-medium text-gray-700">{skill.name}</span>
                </div>
                <span class="text-primary font-semibold">{format!("{percent}%")}</span>
            </div>
            <div class="w-full bg-gray-200 rounded-full h-3">
                <div
                    class="h-3 rounded-full bg-gradient-to-r from-primary to-secondary"
                    style=move || SKILL_BAR.fill_style(phase.get(), percent, index)
                ></div>
            </div>
        </div>
    }
}
