use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use selvam_shared::ProductDescriptor;

/// Images carried per item: the main image and one alternate.
pub const MAX_IMAGES: usize = 2;

/// A product the visitor wants to ask about. Stored as JSON in browser storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub page_url: String,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn from_product(product: &ProductDescriptor, added_at: DateTime<Utc>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            images: product
                .images
                .iter()
                .filter(|path| !path.trim().is_empty())
                .take(MAX_IMAGES)
                .cloned()
                .collect(),
            page_url: product.page_url.clone(),
            added_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_browser_written_items() {
        let json = r#"[{"id":"kag-16","name":"KAG Parking 16x16","category":"Parking Tiles",
            "images":["assets/images/kag.jpg"],"pageUrl":"https://site/p?product=kag-16",
            "addedAt":"2024-03-01T10:15:00.000Z"}]"#;
        let items: Vec<CartItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].page_url, "https://site/p?product=kag-16");
        assert_eq!(items[0].added_at.to_rfc3339(), "2024-03-01T10:15:00+00:00");
    }

    #[test]
    fn test_writes_camel_case_keys() {
        let product = ProductDescriptor::new("g1", "Black Galaxy", "Granite").with_page_url("/g1");
        let item = CartItem::from_product(&product, Utc::now());
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("pageUrl").is_some());
        assert!(json.get("addedAt").is_some());
        assert!(json.get("page_url").is_none());
    }

    #[test]
    fn test_keeps_first_two_non_empty_images() {
        let product = ProductDescriptor::new("g1", "Black Galaxy", "Granite")
            .with_image("")
            .with_image("assets/images/g1.jpg")
            .with_image("assets/images/g1-alt.jpg")
            .with_image("assets/images/g1-room.jpg");
        let item = CartItem::from_product(&product, Utc::now());
        assert_eq!(item.images, vec!["assets/images/g1.jpg", "assets/images/g1-alt.jpg"]);
    }
}
