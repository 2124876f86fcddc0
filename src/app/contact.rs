use leptos::prelude::*;

use super::reveal::{stagger, Motion, Reveal};
use crate::contact::{ContactForm, Field, SubmitStatus};
use crate::content::CONTACT_CARDS;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section
            id="contact"
            class="py-20 bg-gradient-to-br from-slate-50 via-blue-50 to-indigo-100 relative overflow-hidden"
        >
            <div class="container mx-auto px-4 relative">
                <Reveal class="text-center mb-16">
                    <span class="inline-block px-4 py-2 bg-blue-100 text-blue-600 rounded-full text-sm font-medium mb-4">
                        "Let's Work Together"
                    </span>
                    <h2 class="text-4xl md:text-5xl font-bold text-gray-900">
                        "Get In "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Touch"
                        </span>
                    </h2>
                    <p class="text-gray-600 mt-4 max-w-2xl mx-auto">
                        "Ready to bring your ideas to life? I'm always excited to discuss new projects, creative ideas, or opportunities to be part of your vision."
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-6 max-w-3xl mx-auto mb-16">
                    {CONTACT_CARDS
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            let value = match card.link {
                                Some(href) => {
                                    view! {
                                        <a href=href class="text-blue-600 hover:underline font-medium break-all">
                                            {card.value}
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! { <span class="text-gray-800 font-medium">{card.value}</span> }
                                        .into_any()
                                }
                            };
                            view! {
                                <Reveal motion=Motion::ScaleIn delay_ms=stagger(i, 200)>
                                    <div class="p-6 bg-white rounded-2xl shadow-lg text-center hover:-translate-y-2 transition-transform">
                                        <div class=format!(
                                            "w-14 h-14 mx-auto mb-4 rounded-xl bg-gradient-to-br {} flex items-center justify-center text-white text-2xl",
                                            card.accent.gradient(),
                                        )>
                                            <i class=card.icon.class() />
                                        </div>
                                        <h3 class="text-lg font-bold text-gray-900">{card.title}</h3>
                                        <p class="text-sm text-gray-500 mb-2">{card.description}</p>
                                        {value}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class="max-w-3xl mx-auto">
                    <ContactFormView />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let params = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(params)) => params,
            _ => return,
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::contact::{EmailJsRelay, EmailRelay};

            let outcome = EmailJsRelay::from_build_env().send(&params).await;
            form.update(|f| f.finish_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        drop(params);
    };

    let input_class = "w-full px-4 py-3 rounded-xl border border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all";
    let input = move |field: Field, kind: &'static str, label: &'static str, placeholder: &'static str| {
        view! {
            <div>
                <label for=field.name() class="block text-sm font-medium text-gray-700 mb-2">
                    {label}
                </label>
                <input
                    type=kind
                    id=field.name()
                    name=field.name()
                    required
                    placeholder=placeholder
                    class=input_class
                    prop:value=move || form.with(|f| f.fields().get(field).to_string())
                    on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="p-8 bg-white rounded-3xl shadow-2xl">
            <h3 class="text-2xl font-bold text-gray-900 mb-2">"Send Me a Message"</h3>
            <p class="text-gray-600 mb-6">
                "Have a project in mind? Fill out the form below and I'll get back to you as soon as possible."
            </p>
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-6">
                    {input(Field::Name, "text", "Your Name *", "John Doe")}
                    {input(Field::Email, "email", "Email Address *", "john@example.com")}
                </div>
                {input(Field::Subject, "text", "Subject *", "Project Discussion")}
                <div>
                    <label for="message" class="block text-sm font-medium text-gray-700 mb-2">
                        "Message *"
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        rows="6"
                        required
                        placeholder="Tell me about your project..."
                        class=format!("{input_class} resize-none")
                        prop:value=move || form.with(|f| f.fields().message.clone())
                        on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || form.with(|f| f.is_submitting())
                    class="w-full flex items-center justify-center px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-xl font-semibold shadow-lg hover:shadow-xl transition-all disabled:opacity-60 disabled:cursor-not-allowed"
                >
                    {move || if form.with(|f| f.is_submitting()) { "Sending..." } else { "Send Message" }}
                </button>
                {move || match form.with(|f| f.status()) {
                    Some(SubmitStatus::Success) => Some(view! {
                        <div class="p-4 bg-green-50 border border-green-200 text-green-700 rounded-xl">
                            "Message sent successfully! I'll get back to you soon."
                        </div>
                    }.into_any()),
                    Some(SubmitStatus::Error) => Some(view! {
                        <div class="p-4 bg-red-50 border border-red-200 text-red-700 rounded-xl">
                            "Failed to send message. Please try again or email me directly."
                        </div>
                    }.into_any()),
                    None => None,
                }}
            </form>
        </div>
    }
}
