use serde::{Deserialize, Serialize};
use crate::product::ProductListing;

/// One dropdown on the products page. `all` disables the facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Parses a dropdown value.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }
}

/// Category, brand and size filter for the products grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub category: Facet,
    pub brand: Facet,
    pub size: Facet,
}

impl ListingFilter {
    pub fn new(category: &str, brand: &str, size: &str) -> Self {
        Self {
            category: Facet::parse(category),
            brand: Facet::parse(brand),
            size: Facet::parse(size),
        }
    }

    pub fn is_visible(&self, listing: &ProductListing) -> bool {
        self.category.matches(&listing.category)
            && self.brand.matches(&listing.brand)
            && self.size.matches(&listing.size)
    }

    /// Visible listings, in catalogue order.
    pub fn apply<'a>(&self, listings: &'a [ProductListing]) -> Vec<&'a ProductListing> {
        listings.iter().filter(|l| self.is_visible(l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, category: &str, brand: &str, size: &str) -> ProductListing {
        ProductListing {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: category.to_string(),
            brand: brand.to_string(),
            size: size.to_string(),
            rate_key: None,
        }
    }

    #[test]
    fn test_all_facets_show_everything() {
        let listings = vec![
            listing("a", "floor", "kag", "2x2"),
            listing("b", "wall", "somany", "1x1"),
        ];
        let filter = ListingFilter::new("all", "all", "all");
        assert_eq!(filter.apply(&listings).len(), 2);
        assert_eq!(ListingFilter::default(), filter);
    }

    #[test]
    fn test_facets_combine_and_keep_order() {
        let listings = vec![
            listing("a", "parking", "kag", "16x16"),
            listing("b", "floor", "kag", "2x2"),
            listing("c", "parking", "kag", "12x12"),
            listing("d", "parking", "kag", "16x16"),
        ];
        let filter = ListingFilter::new("parking", "kag", "16x16");
        let ids: Vec<&str> = filter.apply(&listings).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_no_match() {
        let listings = vec![listing("a", "floor", "kag", "2x2")];
        let filter = ListingFilter::new("all", "johnson", "all");
        assert!(filter.apply(&listings).is_empty());
    }
}
