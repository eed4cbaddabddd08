//! Shared plain-Rust core for the Animantra frontend platform.
//!
//! Everything in this crate is free of browser and server dependencies so it
//! can be exercised by native `cargo test` while being consumed from the WASM
//! frontend: form validation, pagination/list bookkeeping for the data-table
//! hook, dialog draft state, and the shop/cart transfer types together with
//! their optimistic mutations.

mod dialog;
mod paging;
mod shop;
mod table;
mod validation;
mod validators;

pub use dialog::DialogState;
pub use paging::{paginate_locally, Page, PageQuery, PaginationState};
pub use shop::{
    Address, Cart, CartItem, CartView, CategoryRef, CheckoutRequest, CheckoutResponse,
    DiscountApplication, Product, ProductImage, ProductVariant,
};
pub use table::{ListState, RequestSequence};
pub use validation::{ValidationError, ValidationResult, Validator};
pub use validators::{
    validate_image_file, validate_personaggio, validate_product_create, validate_product_image,
    validate_product_update, validate_variant, ImageInput, PersonaggioInput, ProductInput,
    VariantInput,
};
