pub mod product_card;
pub mod product_detail;
pub mod view;

pub use product_detail::ShopProductDetail;
pub use view::ShopCatalog;
