//! Resource validators built on [`Validator`](crate::Validator), mirroring
//! the rules the backend enforces for each entity.

use std::sync::LazyLock;

use regex::Regex;

use crate::validation::{ValidationResult, Validator};

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];
const MAX_GALLERY_IMAGES: usize = 20;

/// Fields of a personaggio draft subject to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonaggioInput {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub images: Vec<String>,
    pub background_color: String,
    pub background_type: String,
    pub gradient_from: String,
    pub gradient_to: String,
    pub background_image: String,
    pub order: Option<i32>,
}

pub fn validate_personaggio(input: &PersonaggioInput) -> ValidationResult {
    let mut validator = Validator::new()
        .required("name", &input.name)
        .min_length("name", &input.name, 1)
        .max_length("name", &input.name, 100)
        .max_length("description", &input.description, 2000)
        .url("icon", &input.icon)
        .color_hex("backgroundColor", &input.background_color)
        .one_of(
            "backgroundType",
            &input.background_type,
            &["solid", "gradient", "image"],
        );

    if input.images.len() > MAX_GALLERY_IMAGES {
        validator = validator.error(
            "images",
            format!("cannot exceed {MAX_GALLERY_IMAGES} images"),
        );
    }
    for (i, image) in input.images.iter().enumerate() {
        validator = validator.url(&format!("images[{i}]"), image);
    }

    if input.background_type == "gradient" {
        validator = validator
            .color_hex("gradientFrom", &input.gradient_from)
            .color_hex("gradientTo", &input.gradient_to);
    }
    if input.background_type == "image" {
        validator = validator.url("backgroundImage", &input.background_image);
    }

    if matches!(input.order, Some(order) if order < 0) {
        validator = validator.error("order", "must be a non-negative integer");
    }

    validator.finish()
}

/// Fields of a shop product draft subject to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInput {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub long_description: String,
    pub base_price: f64,
    pub currency: String,
    pub sku: String,
    pub gtin: String,
    pub status: String,
}

pub fn validate_product_create(input: &ProductInput) -> ValidationResult {
    Validator::new()
        .required("title", &input.title)
        .min_length("title", &input.title, 1)
        .max_length("title", &input.title, 500)
        .required("slug", &input.slug)
        .min_length("slug", &input.slug, 1)
        .max_length("slug", &input.slug, 255)
        .pattern(
            "slug",
            &input.slug,
            &SLUG_PATTERN,
            "must contain only lowercase letters, numbers, and hyphens",
        )
        .max_length("short_description", &input.short_description, 1000)
        .max_length("long_description", &input.long_description, 50000)
        .min_value("base_price", input.base_price, 0.0)
        .max_length("currency", &input.currency, 3)
        .max_length("sku", &input.sku, 100)
        .max_length("gtin", &input.gtin, 50)
        .one_of("status", &input.status, &["draft", "published", "archived"])
        .finish()
}

/// Update drafts validate the same shapes but nothing is required; untouched
/// fields stay empty and are skipped by the rules.
pub fn validate_product_update(input: &ProductInput) -> ValidationResult {
    Validator::new()
        .min_length("title", &input.title, 1)
        .max_length("title", &input.title, 500)
        .min_length("slug", &input.slug, 1)
        .max_length("slug", &input.slug, 255)
        .pattern(
            "slug",
            &input.slug,
            &SLUG_PATTERN,
            "must contain only lowercase letters, numbers, and hyphens",
        )
        .max_length("short_description", &input.short_description, 1000)
        .max_length("long_description", &input.long_description, 50000)
        .min_value("base_price", input.base_price, 0.0)
        .max_length("currency", &input.currency, 3)
        .max_length("sku", &input.sku, 100)
        .max_length("gtin", &input.gtin, 50)
        .one_of("status", &input.status, &["draft", "published", "archived"])
        .finish()
}

/// Fields of a product variant draft subject to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantInput {
    pub sku: String,
    pub name: String,
    pub stock: i64,
}

pub fn validate_variant(input: &VariantInput) -> ValidationResult {
    let mut validator = Validator::new()
        .required("sku", &input.sku)
        .max_length("sku", &input.sku, 100)
        .required("name", &input.name)
        .max_length("name", &input.name, 255);

    if input.stock < 0 {
        validator = validator.error("stock", "must be non-negative");
    }

    validator.finish()
}

/// Fields of a product image record subject to validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageInput {
    pub url: String,
    pub alt_text: String,
    pub position: Option<i64>,
}

pub fn validate_product_image(input: &ImageInput) -> ValidationResult {
    let mut validator = Validator::new()
        .required("url", &input.url)
        .max_length("url", &input.url, 1000)
        .url("url", &input.url)
        .max_length("alt_text", &input.alt_text, 500);

    if matches!(input.position, Some(position) if position < 0) {
        validator = validator.error("position", "must be non-negative");
    }

    validator.finish()
}

/// Checks an image upload before it is sent: allowed extension and a size
/// ceiling in megabytes.
pub fn validate_image_file(file_name: &str, size_bytes: u64, max_size_mb: u64) -> ValidationResult {
    let mut result = ValidationResult::default();

    let lowered = file_name.to_lowercase();
    if !ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
    {
        result.add_error(
            "file",
            format!("must be one of: {}", ALLOWED_IMAGE_EXTENSIONS.join(", ")),
        );
    }

    if size_bytes > max_size_mb * 1024 * 1024 {
        result.add_error("file", format!("must not exceed {max_size_mb}MB"));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personaggio(name: &str) -> PersonaggioInput {
        PersonaggioInput {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn personaggio_requires_name() {
        assert!(validate_personaggio(&personaggio("")).has_errors());
        assert!(!validate_personaggio(&personaggio("Leon")).has_errors());
    }

    #[test]
    fn personaggio_rejects_long_name() {
        assert!(validate_personaggio(&personaggio(&"x".repeat(101))).has_errors());
    }

    #[test]
    fn personaggio_checks_gallery_urls() {
        let mut input = personaggio("Leon");
        input.images = vec!["https://cdn.example.com/a.png".into(), "nope".into()];
        let result = validate_personaggio(&input);
        assert!(result.field_error("images[1]").is_some());
        assert!(result.field_error("images[0]").is_none());
    }

    #[test]
    fn personaggio_caps_gallery_size() {
        let mut input = personaggio("Leon");
        input.images = vec!["/img.png".to_string(); 21];
        assert!(validate_personaggio(&input)
            .field_error("images")
            .is_some());
    }

    #[test]
    fn personaggio_gradient_requires_valid_stops() {
        let mut input = personaggio("Leon");
        input.background_type = "gradient".into();
        input.gradient_from = "#12345".into();
        input.gradient_to = "#ABCDEF".into();
        let result = validate_personaggio(&input);
        assert!(result.field_error("gradientFrom").is_some());
        assert!(result.field_error("gradientTo").is_none());
    }

    #[test]
    fn personaggio_rejects_negative_order() {
        let mut input = personaggio("Leon");
        input.order = Some(-1);
        assert!(validate_personaggio(&input).has_errors());
    }

    fn product(title: &str, slug: &str, base_price: f64) -> ProductInput {
        ProductInput {
            title: title.to_string(),
            slug: slug.to_string(),
            base_price,
            ..Default::default()
        }
    }

    #[test]
    fn product_create_rejects_bad_slug() {
        assert!(validate_product_create(&product("T", "Bad Slug", 10.0)).has_errors());
        assert!(!validate_product_create(&product("T", "bad-slug", 10.0)).has_errors());
    }

    #[test]
    fn product_create_requires_title_and_slug() {
        let result = validate_product_create(&product("", "", 0.0));
        assert!(result.field_error("title").is_some());
        assert!(result.field_error("slug").is_some());
    }

    #[test]
    fn product_create_rejects_negative_price() {
        assert!(validate_product_create(&product("T", "t", -0.01)).has_errors());
    }

    #[test]
    fn product_create_checks_status_membership() {
        let mut input = product("T", "t", 1.0);
        input.status = "hidden".into();
        assert!(validate_product_create(&input).has_errors());
        input.status = "published".into();
        assert!(!validate_product_create(&input).has_errors());
    }

    #[test]
    fn product_update_allows_untouched_fields() {
        let input = ProductInput::default();
        assert!(!validate_product_update(&input).has_errors());
    }

    #[test]
    fn product_update_still_checks_touched_fields() {
        let mut input = ProductInput::default();
        input.slug = "Bad Slug".into();
        assert!(validate_product_update(&input).has_errors());
    }

    #[test]
    fn variant_requires_sku_and_name() {
        let result = validate_variant(&VariantInput::default());
        assert!(result.field_error("sku").is_some());
        assert!(result.field_error("name").is_some());
    }

    #[test]
    fn variant_rejects_negative_stock() {
        let input = VariantInput {
            sku: "SKU-1".into(),
            name: "Small".into(),
            stock: -1,
        };
        assert!(validate_variant(&input).has_errors());
    }

    #[test]
    fn product_image_requires_url() {
        assert!(validate_product_image(&ImageInput::default()).has_errors());
        let input = ImageInput {
            url: "https://cdn.example.com/a.webp".into(),
            ..Default::default()
        };
        assert!(!validate_product_image(&input).has_errors());
    }

    #[test]
    fn image_file_size_ceiling() {
        assert!(validate_image_file("photo.png", 11 * 1024 * 1024, 10).has_errors());
        assert!(!validate_image_file("photo.png", 1024 * 1024, 10).has_errors());
    }

    #[test]
    fn image_file_extension_allowlist() {
        assert!(validate_image_file("scan.bmp", 1024, 10).has_errors());
        assert!(!validate_image_file("PHOTO.JPG", 1024, 10).has_errors());
    }
}
