use serde::{Deserialize, Serialize};

/// What a product page hands to the cart when the visitor taps "add".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptor {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Relative image paths, main image first. At most two on the site.
    #[serde(default)]
    pub images: Vec<String>,
    pub page_url: String,
}

impl ProductDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            images: Vec::new(),
            page_url: String::new(),
        }
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.images.push(path.into());
        self
    }

    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = url.into();
        self
    }
}
