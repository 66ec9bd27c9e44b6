use dioxus::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::components::register_link;
use crate::core::state::use_site_state;
use crate::i18n::{self, TranslationTable};

const AVATARS: [&str; 2] = ["/user.png", "/user2.png"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeachersContent {
    pub section_title: String,
    pub section_highlight: String,
    pub section_desc: String,
    pub teachers: Vec<TeacherProfile>,
    pub skills: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeacherProfile {
    pub name: String,
    pub role: String,
    pub bio: String,
}

fn avatar(index: usize) -> &'static str {
    AVATARS[index % AVATARS.len()]
}

static TABLE: Lazy<TranslationTable<TeachersContent>> = Lazy::new(|| i18n::load_table("teachers"));

#[component]
pub fn Teachers() -> Element {
    let state = use_site_state();
    let t = TABLE.resolve((state.lang)());

    rsx! {
        section { id: "teachers", class: "teachers",
            header { class: "teachers__header",
                h2 { class: "section-title",
                    "{t.section_title} "
                    span { class: "section-title__highlight", "{t.section_highlight}" }
                }
                p { class: "teachers__description", "{t.section_desc}" }
            }
            div { class: "teachers__grid",
                for (index, teacher) in t.teachers.iter().enumerate() {
                    article { key: "{index}", class: "teacher-card",
                        img {
                            class: "teacher-card__avatar",
                            src: avatar(index),
                            alt: "{teacher.name}",
                        }
                        h3 { class: "teacher-card__name", "{teacher.name}" }
                        p { class: "teacher-card__role", "{teacher.role}" }
                        p { class: "teacher-card__bio", "{teacher.bio}" }
                        ul { class: "teacher-card__skills",
                            for skill in t.skills.iter() {
                                li { class: "teacher-card__skill", "{skill}" }
                            }
                        }
                        {register_link("button button--primary teacher-card__cta", &t.cta)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatars_alternate() {
        assert_eq!(avatar(0), "/user.png");
        assert_eq!(avatar(1), "/user2.png");
        assert_eq!(avatar(2), "/user.png");
    }
}
