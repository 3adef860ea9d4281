pub mod about;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod routes;
pub mod shop;

pub use about::About;
pub use checkout::{Checkout, CheckoutStep};
pub use contact::Contact;
pub use home::Home;
pub use routes::{App, Route};
pub use shop::Shop;
