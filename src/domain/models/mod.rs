// Domain models
pub mod nav_link;
pub mod navbar_state;

pub use nav_link::{default_links, NavLink, DEFAULT_LINKS};
pub use navbar_state::{Effect, NavAction, NavbarState, Transition};
