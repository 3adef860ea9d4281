use crate::app::pages::Route;
use dioxus::prelude::*;

const STEPS: [&str; 3] = ["shipping", "payment", "review"];

fn next_step(step: &str) -> Option<&'static str> {
    let index = STEPS.iter().position(|s| *s == step)?;
    STEPS.get(index + 1).copied()
}

/// The navbar hides itself on every page below the checkout prefix.
#[component]
pub fn Checkout() -> Element {
    rsx! {
        section { class: "c-page c-page--checkout",
            h1 { class: "c-page__title", "Checkout" }
            Link {
                to: Route::CheckoutStep { step: STEPS[0].to_string() },
                class: "c-button c-button--primary",
                "Start checkout"
            }
            Link { to: Route::Shop {}, class: "c-page__back", "Continue shopping" }
        }
    }
}

#[component]
pub fn CheckoutStep(step: String) -> Element {
    rsx! {
        section { class: "c-page c-page--checkout",
            h1 { class: "c-page__title", "Checkout: {step}" }
            if let Some(next) = next_step(&step) {
                Link {
                    to: Route::CheckoutStep { step: next.to_string() },
                    class: "c-button c-button--primary",
                    "Continue to {next}"
                }
            } else {
                Link { to: Route::Home {}, class: "c-button c-button--primary", "Place order" }
            }
            Link { to: Route::Shop {}, class: "c-page__back", "Back to shop" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_step() {
        assert_eq!(next_step("shipping"), Some("payment"));
        assert_eq!(next_step("payment"), Some("review"));
        assert_eq!(next_step("review"), None);
        assert_eq!(next_step("unknown"), None);
    }
}
