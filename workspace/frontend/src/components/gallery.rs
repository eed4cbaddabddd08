pub mod fumetti;
pub mod personaggi;

pub use fumetti::FumettiGallery;
pub use personaggi::PersonaggiGallery;
