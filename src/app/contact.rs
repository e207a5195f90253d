use leptos::{either::Either, html, prelude::*};

use crate::contact::{
    submit, Acknowledgment, ContactError, ContactForm, Field, LocalAcknowledgment,
};
use crate::content::{CONTACT_CHANNELS, PROFILE, SOCIAL_LINKS};
use crate::motion::CONTACT_ITEM;

use super::reveal::{use_reveal, RevealSection};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 border border-white/20 rounded-xl text-white placeholder-gray-400 focus:outline-none focus:border-primary transition-all duration-300";

#[component]
pub fn Contact() -> impl IntoView {
    let content_ref = NodeRef::<html::Div>::new();
    let phase = use_reveal(content_ref, CONTACT_ITEM.trigger);
    let form = RwSignal::new(ContactForm::default());
    let (status, set_status) = signal(None::<Result<Acknowledgment, ContactError>>);

    view! {
        <RevealSection
            id="contact"
            class="py-20 bg-gradient-to-br from-dark to-darker text-white"
        >
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="section-title text-white">"Get In Touch"</h2>
                    <p class="section-subtitle text-gray-300">
                        "Have a project in mind or want to collaborate? I'd love to hear from you!"
                    </p>
                </div>

                <div node_ref=content_ref class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div>
                        <h3 class="text-3xl font-bold mb-6">"Let's Connect! 🌟"</h3>
                        <p class="text-gray-300 mb-8 text-lg leading-relaxed">
                            "I'm always open to discussing new opportunities, creative projects, or just having a friendly chat about technology and development."
                        </p>
                        <div class="space-y-6 mb-8">
                            {CONTACT_CHANNELS
                                .iter()
                                .enumerate()
                                .map(|(i, channel)| {
                                    view! {
                                        <div
                                            class="flex items-center p-4 bg-white/10 rounded-2xl backdrop-blur-sm hover:bg-white/20"
                                            style=move || CONTACT_ITEM.style(phase.get(), i)
                                        >
                                            <div class="w-12 h-12 bg-gradient-to-r from-primary to-secondary rounded-xl flex items-center justify-center text-white text-xl mr-4">
                                                {channel.icon}
                                            </div>
                                            <div>
                                                <h4 class="font-semibold text-gray-200">{channel.title}</h4>
                                                <a
                                                    href=channel.link
                                                    class="text-white hover:text-primary transition-colors duration-300"
                                                >
                                                    {channel.value}
                                                </a>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div>
                            <h4 class="text-xl font-semibold mb-4">"Follow Me"</h4>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="w-12 h-12 bg-white/10 rounded-full flex items-center justify-center text-white text-xl hover:bg-primary transition-all duration-300 hover:scale-110 backdrop-blur-sm"
                                            >
                                                <i class=link.icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div
                        class="bg-white/10 rounded-3xl p-8 backdrop-blur-sm"
                        style=move || CONTACT_ITEM.style(phase.get(), CONTACT_CHANNELS.len())
                    >
                        <form
                            class="space-y-6"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                let res = form.try_update(|f| submit(f, &LocalAcknowledgment));
                                set_status.set(res);
                            }
                        >
                            <div class="grid md:grid-cols-2 gap-6">
                                <FormField form field=Field::Name kind="text" placeholder="Enter your name" />
                                <FormField form field=Field::Email kind="email" placeholder="Enter your email" />
                            </div>
                            <FormField form field=Field::Subject kind="text" placeholder="What's this about?" />
                            <div>
                                <label for=Field::Message.name() class="block text-gray-200 mb-2 font-medium">
                                    {Field::Message.label()}
                                </label>
                                <textarea
                                    id=Field::Message.name()
                                    name=Field::Message.name()
                                    required
                                    rows="5"
                                    class=format!("{INPUT_CLASS} resize-none")
                                    placeholder="Tell me about your project..."
                                    prop:value=move || form.with(|f| Field::Message.get(f).to_string())
                                    on:input=move |ev| {
                                        form.update(|f| Field::Message.set(f, event_target_value(&ev)))
                                    }
                                ></textarea>
                            </div>
                            <button type="submit" class="w-full btn-primary justify-center">
                                "➤ Send Message"
                            </button>
                            {move || {
                                status
                                    .get()
                                    .map(|res| match res {
                                        Ok(ack) => Either::Left(view! {
                                            <p role="status" class="text-green-300 text-center">{ack.message}</p>
                                        }),
                                        Err(e) => Either::Right(view! {
                                            <p role="alert" class="text-secondary text-center">{e.to_string()}</p>
                                        }),
                                    })
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.name();
    view! {
        <div>
            <label for=id class="block text-gray-200 mb-2 font-medium">
                {field.label()}
            </label>
            <input
                type=kind
                id=id
                name=id
                required
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || form.with(|f| field.get(f).to_string())
                on:input=move |ev| form.update(|f| field.set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-darker text-center py-8 border-t border-white/20">
            <p class="text-gray-300">
                {format!(
                    "© {} {}. Made with ❤️ using Rust, Leptos & Tailwind CSS",
                    env!("BUILD_YEAR"),
                    PROFILE.full_name(),
                )}
            </p>
        </footer>
    }
}
