use crate::domain::services::ElementRole;
use crate::shared::hooks::use_navbar_handle;
use dioxus::prelude::*;

#[component]
pub fn HamburgerButton(open: bool, bars: [&'static str; 3]) -> Element {
    let mut navbar = use_navbar_handle();
    let label = if open { "Close menu" } else { "Open menu" };

    rsx! {
        button {
            class: "c-hamburger",
            r#type: "button",
            aria_label: "{label}",
            aria_expanded: "{open}",
            onclick: move |_| {
                navbar.activate(ElementRole::Hamburger);
            },
            div { class: "c-hamburger__box",
                for bar in bars {
                    span { class: "{bar}" }
                }
            }
        }
    }
}
