use crate::app::components::{CartButton, HamburgerButton, ThemeToggle};
use crate::app::pages::Route;
use crate::domain::models::DEFAULT_LINKS;
use crate::domain::services::{ElementRole, NavbarView};
use crate::shared::hooks::{use_navbar_handle, use_scroll_listener};
use crate::shared::logging;
use dioxus::prelude::*;

/// Storefront navigation bar.
///
/// Rebuilt in full from [`NavbarView`] on every state change. Must be mounted
/// under the router and below `use_navbar()`.
#[component]
pub fn Navbar(on_cart_click: Option<EventHandler<()>>) -> Element {
    let mut navbar = use_navbar_handle();
    use_scroll_listener(navbar);

    let current_path = use_route::<Route>().to_string();
    let state = navbar.state();
    let config = navbar.config();

    let view = match NavbarView::build(&state, &DEFAULT_LINKS, &current_path, &config) {
        NavbarView::Hidden => {
            logging::log_hidden_on_checkout(&current_path, &state.checkout_path_prefix);
            return rsx! {
                nav { class: NavbarView::HIDDEN_CLASS, hidden: true }
            };
        }
        NavbarView::Visible(view) => view,
    };

    rsx! {
        nav { class: "{view.root_class}",
            div { class: "c-navbar__container",
                div { class: "c-navbar__row",
                    // Logo
                    div { class: "c-navbar__brand",
                        Link {
                            to: Route::Home {},
                            class: "c-navbar__logo",
                            onclick: move |_| {
                                navbar.activate(ElementRole::Logo);
                            },
                            img { class: "c-navbar__logo-img", src: "{view.logo_src}", alt: "Logo" }
                        }
                    }

                    // Desktop navigation
                    ul { class: "c-navbar__links",
                        for link in view.desktop_links.iter() {
                            li { key: "{link.id}",
                                Link {
                                    to: link.href.to_string(),
                                    class: "{link.class}",
                                    onclick: move |_| {
                                        navbar.activate(ElementRole::DesktopLink);
                                    },
                                    "{link.label}"
                                    span { class: "c-navbar__underline" }
                                }
                            }
                        }
                    }

                    // Right side actions
                    div { class: "c-navbar__actions",
                        ThemeToggle { icon: view.theme_icon }
                        CartButton { badge: view.cart_badge, on_cart_click }
                        HamburgerButton { open: view.hamburger_open, bars: view.hamburger_bars }
                    }
                }

                // Mobile menu
                div { class: view.mobile_panel_class,
                    div { class: "c-navbar__mobile-inner",
                        for link in view.mobile_links.iter() {
                            Link {
                                key: "{link.id}",
                                to: link.href.to_string(),
                                class: "{link.class}",
                                onclick: move |_| {
                                    navbar.activate(ElementRole::MobileLink);
                                },
                                "{link.label}"
                            }
                        }
                        ThemeToggle { icon: view.theme_icon, mobile: true }
                    }
                }
            }
        }
    }
}
