//! Contact section with a client-side-only enquiry form.
//!
//! Submission is intercepted: the browser's native validation runs, then the
//! handler cancels navigation and shows a placeholder acknowledgement.

use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, CONTACT_HOURS, Section};
use crate::state::contact::{ContactField, ContactState, Role};
use crate::util::notify;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-neutral-300 bg-white px-3 py-2 text-sm outline-none focus:ring-2 focus:ring-black";
const LABEL_CLASS: &str = "block text-sm text-neutral-700";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="scroll-mt-24 border-t border-neutral-200">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <div class="py-16 sm:py-24 grid grid-cols-1 lg:grid-cols-3 gap-10">
                    <div class="lg:col-span-1">
                        <h2 class="text-2xl sm:text-3xl font-semibold tracking-tight">"Get in touch"</h2>
                        <p class="mt-4 text-neutral-700">
                            "Book a free 15\u{2011}minute consultation or ask a question. We\u{2019}ll reply within one business day."
                        </p>
                        <div class="mt-6 text-sm text-neutral-600">
                            <p>
                                <span class="font-medium">"Email:"</span>
                                " "
                                {CONTACT_EMAIL}
                            </p>
                            <p class="mt-1">
                                <span class="font-medium">"Hours:"</span>
                                " "
                                {CONTACT_HOURS}
                            </p>
                        </div>
                    </div>

                    <div class="lg:col-span-2">
                        <ContactForm/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = contact.try_update(ContactState::submit) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        contact.with_untracked(|c| {
            log::info!("contact form submission #{} acknowledged (not sent)", c.submissions);
            log::debug!("contact form payload: {}", serde_json::to_string(&c.form).unwrap_or_default());
        });
        notify::acknowledge(message);
    };

    let text_input = move |field: ContactField| {
        view! {
            <div class="sm:col-span-1">
                <label for=field.id() class=LABEL_CLASS>{field.label()}</label>
                <input
                    id=field.id()
                    type=field.input_type()
                    required=field.required()
                    class=INPUT_CLASS
                    placeholder=field.placeholder()
                    prop:value=move || contact.with(|c| c.form.get(field).to_owned())
                    on:input=move |ev| contact.update(|c| c.set_field(field, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <form class="grid grid-cols-1 sm:grid-cols-2 gap-4" on:submit=on_submit>
            {ContactField::INPUTS.into_iter().map(text_input).collect_view()}

            <div class="sm:col-span-2">
                <label for="role" class=LABEL_CLASS>"I am a...*"</label>
                <select
                    id="role"
                    required=true
                    class=INPUT_CLASS
                    on:change=move |ev| contact.update(|c| c.set_role(&event_target_value(&ev)))
                >
                    <option value="">"Select..."</option>
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.value()>{role.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="sm:col-span-2">
                <label for=ContactField::Message.id() class=LABEL_CLASS>{ContactField::Message.label()}</label>
                <textarea
                    id=ContactField::Message.id()
                    rows=5
                    class=INPUT_CLASS
                    placeholder=ContactField::Message.placeholder()
                    prop:value=move || contact.with(|c| c.form.message.clone())
                    on:input=move |ev| contact.update(|c| c.set_field(ContactField::Message, event_target_value(&ev)))
                ></textarea>
            </div>

            <div class="sm:col-span-2">
                <button
                    type="submit"
                    class="inline-flex w-full sm:w-auto items-center justify-center rounded-md bg-black px-5 py-3 text-sm font-medium text-white hover:opacity-90"
                >
                    "Send message"
                </button>
            </div>
        </form>
    }
}
