use crate::app::components::Icon;
use crate::domain::models::Effect;
use crate::domain::services::ElementRole;
use crate::shared::hooks::use_navbar_handle;
use crate::shared::logging;
use dioxus::prelude::*;

const CART_PATH: &str = "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z";

/// Cart glyph with a raw item count badge. Clicks go to `on_cart_click`.
#[component]
pub fn CartButton(
    #[props(!optional)] badge: Option<u32>,
    #[props(!optional)] on_cart_click: Option<EventHandler<()>>,
) -> Element {
    let mut navbar = use_navbar_handle();

    rsx! {
        button {
            class: "c-cart-button",
            r#type: "button",
            aria_label: "Cart",
            onclick: move |_| {
                for effect in navbar.activate(ElementRole::CartButton) {
                    if effect == Effect::OpenCart {
                        match on_cart_click {
                            Some(handler) => handler.call(()),
                            None => logging::log_cart_unhandled(),
                        }
                    }
                }
            },
            Icon { shape: CART_PATH }
            if let Some(count) = badge {
                span { class: "c-cart-button__badge", "{count}" }
            }
        }
    }
}
