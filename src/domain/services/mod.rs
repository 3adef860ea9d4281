pub mod bindings;
pub mod navbar_view;

pub use bindings::{action_for, Binding, ElementRole, UiEvent, BINDINGS};
pub use navbar_view::{LinkView, NavbarView, ThemeIcon, VisibleNavbar};
