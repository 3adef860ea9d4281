use crate::app::pages::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-page c-page--hero",
            h1 { class: "c-page__title", "New season, new arrivals" }
            p { class: "c-page__lead", "Hand-picked goods, shipped from our workshop to your door." }
            Link { to: Route::Shop {}, class: "c-button c-button--primary", "Browse the shop" }
        }
    }
}
