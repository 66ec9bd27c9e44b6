use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::forms::{self, ContactDraft, FormStatus, StatusLines};
use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

/// `(label, url, modifier)` for the social buttons.
const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("YouTube", "https://www.youtube.com/@koreancenterkokandcity8200", "youtube"),
    ("Instagram", "https://www.instagram.com/kc_korean", "instagram"),
    ("Telegram", "https://t.me/koreancenter_kc", "telegram"),
    ("Facebook", "https://www.facebook.com/share/1HXwnNJiUC/", "facebook"),
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactContent {
    pub header: String,
    pub description: String,
    pub name_placeholder: String,
    pub message_placeholder: String,
    pub submit: String,
    pub sending: String,
    pub phone: String,
    pub address: String,
    pub bug_report: String,
    pub success: String,
    pub error: String,
    pub missing: String,
}

impl ContactContent {
    /// Status strings for the form. The contact form has no age field.
    pub fn status_lines(&self) -> StatusLines<'_> {
        StatusLines {
            success: &self.success,
            error: &self.error,
            missing: &self.missing,
            invalid_age: &self.missing,
        }
    }

    /// `tel:` link for the displayed phone number.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

static TABLE: Lazy<TranslationTable<ContactContent>> = Lazy::new(|| i18n::load_table("contact"));

#[component]
pub fn Contact() -> Element {
    let state = use_site_state();
    let mut draft = use_signal(ContactDraft::default);
    let mut status = use_signal(FormStatus::default);

    let t = TABLE.resolve((state.lang)());
    let phone_href = t.phone_href();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status().is_sending() {
            return;
        }
        let validated = forms::prepare(draft.read().validate());
        match validated {
            Ok(submission) => {
                status.set(FormStatus::Sending);
                spawn(async move {
                    let outcome = forms::deliver(submission).await;
                    if outcome == FormStatus::Sent {
                        draft.set(Default::default());
                    }
                    status.set(outcome);
                });
            }
            Err(rejected) => status.set(rejected),
        }
    };

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "contact__inner",
                div { class: "contact__details",
                    h2 { class: "section-title", "{t.header}" }
                    p { class: "contact__description", "{t.description}" }
                    a { class: "contact__line", href: "{phone_href}", "📞 {t.phone}" }
                    p { class: "contact__line", "📍 {t.address}" }
                    div { class: "contact__social",
                        for (label, url, modifier) in SOCIAL_LINKS {
                            a {
                                key: "{modifier}",
                                class: "contact__social-link contact__social-link--{modifier}",
                                href: url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{label}"
                            }
                        }
                    }
                }

                form { class: "form contact__form", onsubmit: on_submit,
                    h3 { class: "form__title", "{t.bug_report}" }
                    input {
                        class: "form__input",
                        r#type: "text",
                        name: "name",
                        required: true,
                        placeholder: "{t.name_placeholder}",
                        value: "{draft.read().name}",
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                    textarea {
                        class: "form__input form__input--multiline",
                        name: "message",
                        required: true,
                        rows: 5,
                        placeholder: "{t.message_placeholder}",
                        value: "{draft.read().message}",
                        oninput: move |evt: FormEvent| draft.write().message = evt.value(),
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: status().is_sending(),
                        if status().is_sending() { "{t.sending}" } else { "{t.submit}" }
                    }
                    if let Some(line) = status().message(&t.status_lines()) {
                        p {
                            class: format!("form__status {}", status().modifier()),
                            role: "status",
                            "{line}"
                        }
                    }
                }
            }
        }
    }
}
