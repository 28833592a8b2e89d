use leptos::{either::Either, prelude::*, task::spawn_local};

use crate::contact::{ContactForm, Field, SubmissionStatus, MESSAGE_MAX_LEN};
use crate::content::CONTACT_EMAIL;
use crate::email::{EmailConfig, EmailGateway, EmailJsClient};

/// Handle to the single contact form state.
///
/// Created once by the page and passed to whichever component needs it.
/// Components read through the accessors and mutate only through the
/// methods, so all writes go through [`ContactForm`].
#[derive(Clone, Copy)]
pub struct FormController {
    state: RwSignal<ContactForm>,
    config: StoredValue<EmailConfig>,
}

impl FormController {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            state: RwSignal::new(ContactForm::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.state.with(|f| f.field(field).to_string())
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.with(|f| f.status().clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(ContactForm::is_loading)
    }

    pub fn focused(&self) -> Option<Field> {
        self.state.with(ContactForm::focused)
    }

    pub fn message_len(&self) -> usize {
        self.state.with(ContactForm::message_len)
    }

    pub fn update_field(&self, field: Field, value: String) {
        self.state.update(|f| f.update_field(field, value));
    }

    pub fn set_focused(&self, field: Option<Field>) {
        self.state.update(|f| f.set_focused(field));
    }

    /// Validates, then sends in the background. A successful send schedules
    /// the form reset; a failure leaves the input in place for a retry.
    pub fn submit(&self) {
        let state = self.state;
        let Some(Ok(payload)) = state.try_update(ContactForm::begin_submit) else {
            return;
        };
        let config = self.config.get_value();
        spawn_local(async move {
            let outcome = EmailJsClient::new().send(&payload, &config).await;
            let reset_after = state
                .try_update(|f| f.finish_submit(outcome))
                .and_then(|o| o.reset_after());
            if let Some(delay) = reset_after {
                set_timeout(
                    move || {
                        state.try_update(ContactForm::reset);
                    },
                    delay,
                );
            }
        });
    }
}

#[component]
fn TextField(
    form: FormController,
    field: Field,
    label: &'static str,
    icon: &'static str,
    placeholder: &'static str,
    maxlength: usize,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group" class:focused=move || form.focused() == Some(field)>
            <label for=field.as_str() class="form-label">
                <span class="label-icon">{icon}</span>
                {label}
                {required.then_some(" *")}
            </label>
            <input
                type=input_type.unwrap_or("text")
                id=field.as_str()
                name=field.as_str()
                placeholder=placeholder
                maxlength=maxlength.to_string()
                required=required
                class="form-input"
                prop:value=move || form.value(field)
                on:input=move |ev| form.update_field(field, event_target_value(&ev))
                on:focus=move |_| form.set_focused(Some(field))
                on:blur=move |_| form.set_focused(None)
            />
        </div>
    }
}

#[component]
pub fn Contact(form: FormController) -> impl IntoView {
    let status_banner = move || {
        let status = form.status();
        let class = match status {
            SubmissionStatus::Error(_) => "status-message error",
            _ => "status-message success",
        };
        status.message().map(|m| {
            view! {
                <div class=class role="status">
                    {m.to_string()}
                </div>
            }
        })
    };

    view! {
        <section id="contact" class="contact-section">
            <div class="contact-container">
                <div class="contact-header">
                    <h2 class="contact-title">"Contact Me"</h2>
                    <p class="contact-subtitle">
                        "A question? A project? Don't hesitate to reach out."
                    </p>
                </div>

                <form
                    class="contact-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        form.submit();
                    }
                >
                    <TextField
                        form
                        field=Field::Name
                        label="Full name"
                        icon="👤"
                        placeholder="Your name"
                        maxlength=100
                        required=true
                    />
                    <TextField
                        form
                        field=Field::Email
                        label="Email address"
                        icon="✉️"
                        placeholder="you@email.com"
                        maxlength=100
                        input_type="email"
                        required=true
                    />
                    <TextField
                        form
                        field=Field::Subject
                        label="Subject"
                        icon="📋"
                        placeholder="What is this about?"
                        maxlength=200
                    />

                    <div
                        class="form-group"
                        class:focused=move || form.focused() == Some(Field::Message)
                    >
                        <label for="message" class="form-label">
                            <span class="label-icon">"💬"</span>
                            "Message *"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            placeholder="Write your message here..."
                            rows="6"
                            maxlength=MESSAGE_MAX_LEN.to_string()
                            required=true
                            class="form-textarea"
                            prop:value=move || form.value(Field::Message)
                            on:input=move |ev| {
                                form.update_field(Field::Message, event_target_value(&ev))
                            }
                            on:focus=move |_| form.set_focused(Some(Field::Message))
                            on:blur=move |_| form.set_focused(None)
                        ></textarea>
                        <span class="char-count">
                            {move || form.message_len()} " / " {MESSAGE_MAX_LEN} " characters"
                        </span>
                    </div>

                    {status_banner}

                    <button
                        type="submit"
                        class="submit-button"
                        class:loading=move || form.is_loading()
                        disabled=move || form.is_loading()
                    >
                        {move || {
                            if form.is_loading() {
                                Either::Left(
                                    view! {
                                        <span class="spinner"></span>
                                        "Sending..."
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <span class="button-icon">"📤"</span>
                                        "Send message"
                                    },
                                )
                            }
                        }}
                    </button>
                </form>

                <div class="contact-info">
                    <p class="info-text">
                        "You can also email me directly at "
                        <a href=format!("mailto:{CONTACT_EMAIL}") class="email-link">
                            {CONTACT_EMAIL}
                        </a>
                    </p>
                </div>
            </div>
        </section>
    }
}
