use crate::app::components::Icon;
use crate::domain::services::{ElementRole, ThemeIcon};
use crate::shared::hooks::use_navbar_handle;
use dioxus::prelude::*;

/// Theme toggle button. The icon shows the theme a click switches to:
/// sun while dark, moon while light.
#[component]
pub fn ThemeToggle(icon: ThemeIcon, #[props(default = false)] mobile: bool) -> Element {
    let mut navbar = use_navbar_handle();

    let (role, class) = if mobile {
        (ElementRole::MobileThemeToggle, "c-theme-toggle c-theme-toggle--mobile")
    } else {
        (ElementRole::ThemeToggle, "c-theme-toggle")
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: "{icon.label()}",
            aria_label: "{icon.label()}",
            onclick: move |_| {
                navbar.activate(role);
            },
            Icon { shape: icon.path() }
            if mobile {
                span { class: "c-theme-toggle__label", "{icon.label()}" }
            }
        }
    }
}
