use dioxus::prelude::*;

/// 24x24 outline icon drawn with `currentColor`.
#[component]
pub fn Icon(shape: &'static str, #[props(default = "c-icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "{shape}",
            }
        }
    }
}
