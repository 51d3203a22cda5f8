use std::sync::Arc;

use chrono::Utc;
use selvam_shared::ProductDescriptor;
use tracing::{debug, error};

use crate::item::CartItem;
use crate::message;
use crate::prompt::{Confirmer, Notice, NoticeKind, Notifier};
use crate::storage::KeyValueStore;
use crate::view::{Badge, CartView};
use crate::CartConfig;

pub const MSG_ADDED: &str = "Added to WhatsApp Cart!";
pub const MSG_ALREADY_IN_CART: &str = "Product already in cart";
pub const MSG_REMOVED: &str = "Removed from cart";
pub const MSG_CLEARED: &str = "Cart cleared";
pub const MSG_EMPTY_CART: &str = "Cart is empty. Add products first!";
pub const MSG_SAVE_FAILED: &str = "Could not save your cart";
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all items from your cart?";

/// One per page. Storage is the only source of truth: every read deserializes it again
/// and every mutation writes the whole list back.
pub struct CartManager {
    config: CartConfig,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    modal_open: bool,
}

impl CartManager {
    pub fn new(
        config: CartConfig,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            config,
            store,
            notifier,
            confirmer,
            modal_open: false,
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Items in insertion order. Unreadable or corrupt storage reads as an empty cart.
    pub fn cart(&self) -> Vec<CartItem> {
        let raw = match self.store.get(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Error reading cart: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(items) => items,
            Err(e) => {
                error!("Error reading cart: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[CartItem]) -> bool {
        let bytes = match serde_json::to_vec(items) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Error saving cart: {}", e);
                return false;
            }
        };

        match self.store.set(&self.config.storage_key, &bytes) {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving cart: {}", e);
                false
            }
        }
    }

    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notifier.notify(Notice::new(kind, message));
    }

    /// Returns false when the id is already in the cart or the write failed.
    pub fn add_to_cart(&self, product: &ProductDescriptor) -> bool {
        let mut items = self.cart();

        if items.iter().any(|item| item.id == product.id) {
            self.notify(NoticeKind::Info, MSG_ALREADY_IN_CART);
            return false;
        }

        items.push(CartItem::from_product(product, Utc::now()));

        if !self.save(&items) {
            self.notify(NoticeKind::Warning, MSG_SAVE_FAILED);
            return false;
        }

        debug!("Cart add: {} ({} items)", product.id, items.len());
        self.notify(NoticeKind::Success, MSG_ADDED);
        true
    }

    /// Drops the item with this id. An unknown id leaves storage untouched.
    pub fn remove_from_cart(&self, id: &str) {
        let mut items = self.cart();
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() < before && !self.save(&items) {
            self.notify(NoticeKind::Warning, MSG_SAVE_FAILED);
            return;
        }

        self.notify(NoticeKind::Info, MSG_REMOVED);
    }

    /// Deletes the stored cart after the visitor confirms. Returns whether it was cleared.
    ///
    /// An empty cart is left alone: no prompt, no write.
    pub fn clear_cart(&self) -> bool {
        if self.cart().is_empty() {
            return false;
        }

        if !self.confirmer.confirm(CLEAR_PROMPT) {
            return false;
        }

        if let Err(e) = self.store.remove(&self.config.storage_key) {
            error!("Error clearing cart: {}", e);
            self.notify(NoticeKind::Warning, MSG_SAVE_FAILED);
            return false;
        }

        self.notify(NoticeKind::Info, MSG_CLEARED);
        true
    }

    pub fn outbound_message(&self) -> String {
        message::outbound_message(&self.cart(), &self.config.website_url)
    }

    /// Deep link to open in a new browsing context, or `None` when the cart is empty.
    pub fn send_to_whatsapp(&mut self) -> Option<String> {
        if self.cart().is_empty() {
            self.notify(NoticeKind::Warning, MSG_EMPTY_CART);
            return None;
        }

        self.close_modal();
        let text = self.outbound_message();
        Some(message::whatsapp_link(&self.config.whatsapp_number, &text))
    }

    /// Link for a single product card's "Enquire" button.
    pub fn product_enquiry_link(&self, product_name: &str) -> String {
        message::whatsapp_link(
            &self.config.whatsapp_number,
            &message::product_enquiry_message(product_name),
        )
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn badge(&self) -> Badge {
        Badge::for_count(self.cart().len())
    }

    pub fn render(&self) -> CartView {
        CartView::from_items(&self.cart(), self.modal_open)
    }
}
