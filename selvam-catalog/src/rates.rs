use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const PARKING_KAG_16X16: &str = "parking-kag-16x16";
pub const PARKING_KAG_RAFALE_16X16: &str = "parking-kag-rafale-16x16";

/// Published price for a product, as displayed (struck-through old price and current price).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub old_price: String,
    pub current_price: String,
}

impl Rate {
    pub fn new(old_price: impl Into<String>, current_price: impl Into<String>) -> Self {
        Self {
            old_price: old_price.into(),
            current_price: current_price.into(),
        }
    }
}

/// Showroom rate card. Prices are display strings maintained by hand, not computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCard {
    rates: HashMap<String, Rate>,
}

impl Default for RateCard {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert(
            PARKING_KAG_16X16.to_string(),
            Rate::new("Rs. 70.00", "Rs. 59.00 / sq ft"),
        );
        rates.insert(
            PARKING_KAG_RAFALE_16X16.to_string(),
            Rate::new("Rs. 65.00", "Rs. 55.00 / sq ft"),
        );
        Self { rates }
    }
}

impl RateCard {
    pub fn empty() -> Self {
        Self { rates: HashMap::new() }
    }

    /// Adds or replaces a rate.
    pub fn set(&mut self, key: impl Into<String>, rate: Rate) {
        self.rates.insert(key.into(), rate);
    }

    pub fn rate(&self, key: &str) -> Option<&Rate> {
        self.rates.get(key)
    }

    pub fn parking_kag_16x16(&self) -> Option<&Rate> {
        self.rate(PARKING_KAG_16X16)
    }

    pub fn parking_kag_rafale_16x16(&self) -> Option<&Rate> {
        self.rate(PARKING_KAG_RAFALE_16X16)
    }

    /// Rate for a listing, if it has a rate key and the card knows it.
    pub fn for_listing(&self, listing: &crate::ProductListing) -> Option<&Rate> {
        listing.rate_key.as_deref().and_then(|key| self.rate(key))
    }
}
