//! WhatsApp enquiry cart.
//!
//! The cart lives in the visitor's browser storage. [`CartManager`] reads it back on every
//! operation and writes through on every change; it never keeps its own copy. Storage,
//! notifications and confirmation prompts are ports so the manager runs without a browser.

pub mod item;
pub mod storage;
pub mod prompt;
pub mod message;
pub mod view;
pub mod manager;
pub mod commands;

pub use item::CartItem;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use prompt::{Confirmer, Notice, NoticeKind, NoticeQueue, Notifier};
pub use manager::CartManager;
pub use view::{Badge, CartBody, CartRow, CartView};
pub use commands::{CartCommand, CartController, CommandOutcome, ProductPage};

use serde::{Deserialize, Serialize};

/// Storage key the site has always used. Changing it orphans every visitor's cart.
pub const CART_STORAGE_KEY: &str = "tilesWhatsAppCart";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartConfig {
    /// Showroom number in international format, digits only.
    pub whatsapp_number: String,
    pub storage_key: String,
    /// Public site root that relative image paths are resolved against.
    pub website_url: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "919942929527".to_string(),
            storage_key: CART_STORAGE_KEY.to_string(),
            website_url: "https://yourwebsite.com/".to_string(),
        }
    }
}
