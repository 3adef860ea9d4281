use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "About us" }
            p { "A small team making durable everyday objects since 2014." }
        }
    }
}
