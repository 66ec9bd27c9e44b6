use dioxus::prelude::*;

use crate::sections::{About, Contact, Courses, Gallery, Hero, Teachers};

/// The single scrolling landing page.
#[component]
pub fn Landing() -> Element {
    rsx! {
        Hero {}
        Courses {}
        Teachers {}
        Gallery {}
        About {}
        Contact {}
    }
}
