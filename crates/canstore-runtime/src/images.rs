use canstore_types::Product;
use std::path::PathBuf;

/// Maps product image filenames onto the images directory.
/// Paths are display references only; nothing here touches the filesystem.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    images_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    pub fn resolve(&self, image: &str) -> PathBuf {
        self.images_dir.join(image)
    }

    pub fn for_product(&self, product: &Product) -> PathBuf {
        self.resolve(&product.image)
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new("images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_images_dir() {
        let resolver = ImageResolver::default();
        assert_eq!(
            resolver.resolve("beans.jpg"),
            PathBuf::from("images/beans.jpg")
        );

        let product = Product::new("Spam", "meat", 2.85, "beef.jpg");
        let custom = ImageResolver::new("/srv/static/images");
        assert_eq!(
            custom.for_product(&product),
            PathBuf::from("/srv/static/images/beef.jpg")
        );
    }
}
