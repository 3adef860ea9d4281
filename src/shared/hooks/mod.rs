// Custom Dioxus hooks
pub mod use_navbar;
pub mod use_scroll;

pub use use_navbar::{use_navbar, use_navbar_handle, use_navbar_with, NavbarController};
pub use use_scroll::use_scroll_listener;
