use serde::{Deserialize, Serialize};
use selvam_shared::ProductDescriptor;

/// A card on the products page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductListing {
    pub id: String,
    pub name: String,
    /// Floor, wall, parking, granite...
    pub category: String,
    pub brand: String,
    /// Tile size as printed on the card, e.g. `16x16`.
    pub size: String,
    /// Key into the rate card, when the showroom publishes a price for it.
    pub rate_key: Option<String>,
}

impl ProductListing {
    /// Descriptor handed to the cart for this listing.
    pub fn descriptor(&self, images: Vec<String>, page_url: impl Into<String>) -> ProductDescriptor {
        ProductDescriptor {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            images,
            page_url: page_url.into(),
        }
    }

    /// Parses the catalogue JSON the products page is built from.
    pub fn parse_catalogue(json: &str) -> Result<Vec<ProductListing>, ProductError> {
        let listings: Vec<ProductListing> =
            serde_json::from_str(json).map_err(|e| ProductError::InvalidCatalogue(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for listing in &listings {
            if listing.id.trim().is_empty() {
                return Err(ProductError::InvalidCatalogue("listing without id".to_string()));
            }
            if !seen.insert(listing.id.as_str()) {
                return Err(ProductError::DuplicateId(listing.id.clone()));
            }
        }
        Ok(listings)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Invalid catalogue: {0}")]
    InvalidCatalogue(String),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}
