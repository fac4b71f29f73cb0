use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
};

use crate::contact::{ContactField, ContactForm, Deferred, DeferredStep};
use crate::content::{portfolio, ContactLink, Section};

use super::hooks::{reveal_class, use_reveal};

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 outline-none transition bg-white dark:bg-gray-800 dark:text-white";

#[component]
pub fn Contact() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(header_ref, Section::Contact.id());
    let (links, resume) = portfolio()
        .map(|p| (p.contact.clone(), p.owner.resume.clone()))
        .unwrap_or_default();

    view! {
        <section id=Section::Contact.id() class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-6">
                <div
                    node_ref=header_ref
                    class=move || format!("text-center mb-16 {}", reveal_class(revealed.get()))
                >
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-800 dark:text-white mb-4">
                        "Get In " <span class="text-blue-600">"Touch"</span>
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 mx-auto"></div>
                    <p class="text-gray-600 dark:text-gray-300 mt-4 max-w-2xl mx-auto">
                        "Feel free to reach out for collaborations or just to say hello!"
                    </p>
                </div>
                <div class=move || {
                    format!(
                        "bg-white dark:bg-gray-700 rounded-xl shadow-lg p-8 max-w-4xl mx-auto {}",
                        reveal_class(revealed.get()),
                    )
                }>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div>
                            <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6">
                                "Contact Information"
                            </h3>
                            <div class="space-y-4">
                                {links
                                    .into_iter()
                                    .map(|link| view! { <ContactItem link /> })
                                    .collect_view()}
                                <a
                                    href=resume.href
                                    download=resume.download_name
                                    class="flex items-center gap-2 bg-blue-600 text-white px-4 py-3 rounded-lg mt-4 w-full md:w-auto justify-center hover:scale-[1.02] transition-transform"
                                >
                                    <i class="extra-download" />
                                    "Download Resume"
                                </a>
                            </div>
                        </div>
                        <div>
                            <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6">
                                "Send Me a Message"
                            </h3>
                            <MessageForm />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(link: ContactLink) -> impl IntoView {
    let target = link.target();
    let rel = link.rel();
    view! {
        <div class="flex items-start">
            <i class=format!("{} text-2xl mt-1 mr-4 text-blue-600", link.kind.icon_class()) />
            <div>
                <h4 class="font-medium text-gray-700 dark:text-gray-200">{link.label}</h4>
                <a
                    href=link.href
                    target=target
                    rel=rel
                    class="text-blue-600 dark:text-blue-400 hover:underline"
                >
                    {link.value}
                </a>
            </div>
        </div>
    }
}

/// The contact form. Owns one [`ContactForm`] and the timer driving its
/// deferred steps; both die with the component.
#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        clear_timer(timer);
        let _ = form.try_update(ContactForm::cancel);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(was_sent) = form.try_with_untracked(ContactForm::is_success) else {
            return;
        };
        match form.try_update(ContactForm::submit) {
            Some(Ok(deferred)) => {
                log::info!("sending message");
                clear_timer(timer);
                schedule(form, timer, deferred);
            }
            Some(Err(err)) => {
                log::warn!("contact form rejected: {err}");
                // a pending delivery keeps its timer; only the notice's goes
                if was_sent {
                    clear_timer(timer);
                }
            }
            None => {}
        }
    };

    view! {
        <form class="space-y-4" novalidate on:submit=on_submit>
            {ContactField::ALL
                .into_iter()
                .map(|field| view! { <FieldInput field form /> })
                .collect_view()}
            {move || {
                form.with(ContactForm::error)
                    .map(|err| {
                        view! { <p class="text-red-500 text-sm animate-fade-in">{err.to_string()}</p> }
                    })
            }}
            <Show when=move || form.with(ContactForm::is_success)>
                <p class="text-green-500 text-sm animate-fade-in">"Message sent successfully!"</p>
            </Show>
            <button
                type="submit"
                class="w-full bg-blue-600 text-white py-3 px-6 rounded-lg font-medium hover:bg-blue-700 transition-colors flex items-center justify-center gap-2"
            >
                {move || {
                    if form.with(ContactForm::is_submitting) { "Sending..." } else { "Send Message" }
                }}
            </button>
        </form>
    }
}

#[component]
fn FieldInput(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let input_type = if field == ContactField::Email { "email" } else { "text" };
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set_field(field, text));
    };

    view! {
        <div>
            <label for=field.id() class="block text-gray-700 dark:text-gray-200 mb-2">
                {field.label()}
            </label>
            {match field {
                ContactField::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                id=field.id()
                                rows=4
                                class=INPUT_CLASS
                                placeholder=field.placeholder()
                                prop:value=value
                                on:input=on_input
                            ></textarea>
                        },
                    )
                }
                ContactField::Name | ContactField::Email => {
                    Either::Right(
                        view! {
                            <input
                                type=input_type
                                id=field.id()
                                class=INPUT_CLASS
                                placeholder=field.placeholder()
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
            }}
        </div>
    }
}

/// Arms a browser timeout for `deferred`, chaining whatever step it yields.
/// Firing after the form is gone is a no-op because the signal is disposed.
fn schedule(
    form: RwSignal<ContactForm>,
    timer: StoredValue<Option<TimeoutHandle>>,
    deferred: Deferred,
) {
    let fire = move || {
        let _ = timer.try_update_value(|t| *t = None);
        let Some(next) = form.try_update(|f| f.fire(deferred)).flatten() else {
            return;
        };
        if deferred.step() == DeferredStep::Deliver {
            log::info!("message sent");
        }
        schedule(form, timer, next);
    };
    match set_timeout_with_handle(fire, deferred.delay()) {
        Ok(handle) => {
            let _ = timer.try_update_value(|t| *t = Some(handle));
        }
        Err(err) => log::error!("couldn't schedule {:?}: {err:?}", deferred.step()),
    }
}

fn clear_timer(timer: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = timer.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}
