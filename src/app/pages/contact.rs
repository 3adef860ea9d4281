use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Contact" }
            p { "Questions about an order? Write to us and we answer within a day." }
            a { class: "c-page__mail", href: "mailto:hello@example.com", "hello@example.com" }
        }
    }
}
