pub mod cart;
pub mod categories;
pub mod checkout;
pub mod common;
pub mod dashboard;
pub mod discounts;
pub mod etsy;
pub mod fumetti;
pub mod gallery;
pub mod layout;
pub mod login;
pub mod notifications;
pub mod orders;
pub mod personaggi;
pub mod products;
pub mod shop;
