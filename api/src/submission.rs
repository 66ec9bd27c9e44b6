use serde::{Deserialize, Serialize};

/// A form submission that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Contact {
        name: String,
        message: String,
    },
    Registration {
        name: String,
        surname: String,
        phone: String,
        age: u8,
        comment: Option<String>,
    },
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Contact { .. } => "contact",
            Submission::Registration { .. } => "registration",
        }
    }

    /// Plain-text message posted to the operator chat.
    pub fn operator_message(&self) -> String {
        match self {
            Submission::Contact { name, message } => {
                format!("🚨 New message (From site):\n👤 Name: {name}\n🐞 Message: {message}")
            }
            Submission::Registration {
                name,
                surname,
                phone,
                age,
                comment,
            } => {
                let comment = comment.as_deref().unwrap_or("-");
                format!(
                    "📌 Yangi Ro‘yxatdan O‘tgan:\n\
                     - Ism: {name}\n\
                     - Familiya: {surname}\n\
                     - Telefon: {phone}\n\
                     - Yoshi: {age}\n\
                     - Izoh: {comment}"
                )
            }
        }
    }
}
