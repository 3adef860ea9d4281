use crate::shared::hooks::use_navbar_handle;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Product {
    id: u32,
    name: &'static str,
    price_cents: u32,
}

static PRODUCTS: [Product; 4] = [
    Product { id: 1, name: "Canvas tote", price_cents: 2400 },
    Product { id: 2, name: "Enamel mug", price_cents: 1800 },
    Product { id: 3, name: "Linen apron", price_cents: 4200 },
    Product { id: 4, name: "Beeswax candle", price_cents: 1200 },
];

fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[component]
pub fn Shop() -> Element {
    let mut navbar = use_navbar_handle();

    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Shop" }
            div { class: "c-product-grid",
                for product in PRODUCTS.iter() {
                    div { key: "{product.id}", class: "c-product",
                        h3 { class: "c-product__name", "{product.name}" }
                        p { class: "c-product__price", "{format_price(product.price_cents)}" }
                        button {
                            class: "c-button c-button--primary",
                            onclick: move |_| {
                                let amount = navbar.cart_amount().saturating_add(1);
                                navbar.set_cart_amount(amount);
                            },
                            "Add to cart"
                        }
                    }
                }
            }
            button {
                class: "c-button c-button--secondary",
                onclick: move |_| navbar.set_cart_amount(0),
                "Empty cart"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2400), "$24.00");
        assert_eq!(format_price(1205), "$12.05");
        assert_eq!(format_price(5), "$0.05");
    }
}
