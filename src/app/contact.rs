use leptos::{prelude::*, task::spawn_local};

use super::reveal::Reveal;
use crate::contact::{ContactForm, Field, SubmitStatus};
use crate::mail::{EmailJsTransport, MailTransport};
use crate::nav::SectionId;

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let transport = StoredValue::new(EmailJsTransport::from_build_env());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(params) = form.try_update(|f| f.begin_submit()).flatten() else {
            log::debug!("contact form not sent: invalid or already sending");
            return;
        };
        let transport = transport.get_value();
        spawn_local(async move {
            let result = transport.send(params).await;
            match &result {
                Ok(()) => log::info!("contact message sent"),
                Err(e) => log::warn!("contact message failed: {e}"),
            }
            form.try_update(|f| f.finish_submit(result));
        });
    };

    let sending = move || form.with(|f| f.status().is_sending());

    view! {
        <section id=SectionId::Contact.dom_id() class="py-24 px-4 max-w-3xl mx-auto">
            <Reveal>
                <h2 class="text-3xl font-bold mb-4 text-center">"Get in touch"</h2>
                <p class="text-center text-muted mb-10">
                    "Have a project in mind or just want to say hi? Send a message."
                </p>
            </Reveal>
            <Reveal delay_ms=100>
                {move || match form.with(|f| f.status().clone()) {
                    SubmitStatus::Success => {
                        Some(
                            view! {
                                <div
                                    role="status"
                                    class="mb-6 p-4 rounded-md bg-green/20 text-green border border-green/30"
                                >
                                    "Thanks! Your message is on its way."
                                </div>
                            }
                                .into_any(),
                        )
                    }
                    SubmitStatus::Failure(msg) => {
                        Some(
                            view! {
                                <div
                                    role="alert"
                                    class="mb-6 p-4 rounded-md bg-red/20 text-red border border-red/30"
                                >
                                    <p class="font-medium">"Your message could not be sent."</p>
                                    <p class="text-sm">{msg}". Please try again."</p>
                                </div>
                            }
                                .into_any(),
                        )
                    }
                    SubmitStatus::Idle | SubmitStatus::Sending => None,
                }}
                <form class="grid gap-6" novalidate=true on:submit=on_submit>
                    <div class="grid sm:grid-cols-2 gap-6">
                        <FormField form field=Field::FullName kind="text" placeholder="Jane Doe" />
                        <FormField
                            form
                            field=Field::Email
                            kind="email"
                            placeholder="jane@example.com"
                        />
                    </div>
                    <FormField form field=Field::Phone kind="tel" placeholder="+1 555 0100" />
                    <FormField
                        form
                        field=Field::Message
                        kind="textarea"
                        placeholder="Tell me about your project..."
                    />
                    <button
                        type="submit"
                        class="justify-self-start bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=sending
                        aria-busy=move || sending().to_string()
                    >
                        {move || if sending() { "Sending..." } else { "Send message" }}
                    </button>
                </form>
            </Reveal>
        </section>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || form.with(|f| f.error(field).map(str::to_string));
    let has_error = move || error().is_some();
    let error_id = format!("{}_error", field.input_id());
    let input_class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground placeholder-muted transition-all duration-200";

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=field.input_id()
                rows=6
                class=input_class
                class:border-red=has_error
                placeholder=placeholder
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        }
            .into_any()
    } else {
        view! {
            <input
                id=field.input_id()
                type=kind
                class=input_class
                class:border-red=has_error
                placeholder=placeholder
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        }
            .into_any()
    };

    view! {
        <div>
            <label for=field.input_id() class="block font-medium text-cyan mb-2">
                {field.label()}
            </label>
            {control}
            {move || {
                error()
                    .map(|e| {
                        view! {
                            <p id=error_id.clone() class="mt-1 text-sm text-red">
                                {e}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
