pub mod cart_button;
pub mod hamburger;
pub mod icon;
pub mod theme_toggle;

pub use cart_button::CartButton;
pub use hamburger::HamburgerButton;
pub use icon::Icon;
pub use theme_toggle::ThemeToggle;
