use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::core::forms::{self, FormStatus, RegistrationDraft, StatusLines};
use crate::core::state::use_site_state;
use crate::i18n::{self, LanguageCode, TranslationTable};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterContent {
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub form_title: String,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub age: String,
    pub comment: String,
    pub submit: String,
    pub sending: String,
    pub success: String,
    pub error: String,
    pub missing: String,
    pub invalid_age: String,
}

impl RegisterContent {
    pub fn status_lines(&self) -> StatusLines<'_> {
        StatusLines {
            success: &self.success,
            error: &self.error,
            missing: &self.missing,
            invalid_age: &self.invalid_age,
        }
    }
}

static TABLE: Lazy<TranslationTable<RegisterContent>> = Lazy::new(|| i18n::load_table("register"));

/// Course registration page. Its language dropdown drives the site-wide language.
#[component]
pub fn Register() -> Element {
    let state = use_site_state();
    let mut draft = use_signal(RegistrationDraft::default);
    let mut status = use_signal(FormStatus::default);

    let current = (state.lang)();
    let t = TABLE.resolve(current);

    let on_language = move |evt: FormEvent| match evt.value().parse::<LanguageCode>() {
        Ok(code) => state.select_language(code),
        Err(err) => tracing::warn!(%err, "ignoring language selection"),
    };

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
        section { class: "register",
            div { class: "register__inner",
                div { class: "register__intro",
                    div { class: "register__language",
                        select {
                            class: "form__input register__language-select",
                            value: "{current}",
                            oninput: on_language,
                            for code in LanguageCode::ALL {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: code == current,
                                    {format!("{} {}", code.flag(), code.native_name())}
                                }
                            }
                        }
                    }
                    h1 { class: "register__title", "{t.title}" }
                    p { class: "register__description", "{t.description}" }
                    ul { class: "register__benefits",
                        for benefit in t.benefits.iter() {
                            li { class: "register__benefit", "✔ {benefit}" }
                        }
                    }
                }

                form { class: "form register__form", onsubmit: on_submit,
                    h2 { class: "form__title", "{t.form_title}" }
                    div { class: "form__row",
                        input {
                            class: "form__input",
                            r#type: "text",
                            name: "name",
                            required: true,
                            placeholder: "{t.name}",
                            value: "{draft.read().name}",
                            oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                        }
                        input {
                            class: "form__input",
                            r#type: "text",
                            name: "surname",
                            required: true,
                            placeholder: "{t.surname}",
                            value: "{draft.read().surname}",
                            oninput: move |evt: FormEvent| draft.write().surname = evt.value(),
                        }
                    }
                    input {
                        class: "form__input",
                        r#type: "tel",
                        name: "phone",
                        required: true,
                        placeholder: "{t.phone}",
                        value: "{draft.read().phone}",
                        oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                    }
                    input {
                        class: "form__input",
                        r#type: "number",
                        name: "age",
                        required: true,
                        min: "1",
                        max: "120",
                        placeholder: "{t.age}",
                        value: "{draft.read().age}",
                        oninput: move |evt: FormEvent| draft.write().age = evt.value(),
                    }
                    textarea {
                        class: "form__input form__input--multiline",
                        name: "comment",
                        rows: 3,
                        placeholder: "{t.comment}",
                        value: "{draft.read().comment}",
                        oninput: move |evt: FormEvent| draft.write().comment = evt.value(),
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
