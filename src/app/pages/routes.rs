use crate::app::layouts::Navbar;
use crate::app::pages::{About, Checkout, CheckoutStep, Contact, Home, Shop};
use crate::shared::hooks::{use_navbar, use_navbar_handle};
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StorefrontLayout)]
    #[route("/")]
    Home {},
    #[route("/shop")]
    Shop {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},

    // The navbar hides below the checkout prefix
    #[route("/checkout")]
    Checkout {},
    #[route("/checkout/:step")]
    CheckoutStep { step: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_navbar();

    use_effect(|| {
        tracing::info!("Storefront app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn StorefrontLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");
    let mut cart_open = use_signal(|| false);

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {
                on_cart_click: move |_| cart_open.set(!cart_open()),
            }
            if cart_open() {
                CartSummary { on_close: move |_| cart_open.set(false) }
            }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Stand-in cart collaborator: shows the count and links to checkout.
#[component]
fn CartSummary(on_close: EventHandler<()>) -> Element {
    let navbar = use_navbar_handle();
    let amount = navbar.cart_amount();

    rsx! {
        aside { class: "c-cart-summary",
            p { class: "c-cart-summary__count",
                if amount == 0 { "Your cart is empty" } else { "{amount} item(s) in your cart" }
            }
            if amount > 0 {
                Link {
                    to: Route::Checkout {},
                    class: "c-button c-button--primary",
                    onclick: move |_| on_close.call(()),
                    "Checkout"
                }
            }
            button { class: "c-button c-button--secondary", onclick: move |_| on_close.call(()), "Close" }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "c-button c-button--primary", "Back home" }
        }
    }
}
