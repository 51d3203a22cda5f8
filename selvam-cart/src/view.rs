use crate::item::CartItem;

pub const PLACEHOLDER_IMAGE: &str = "assets/images/placeholder.jpg";

/// Floating cart button counter. Hidden at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub count: usize,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartBody {
    Empty,
    Items(Vec<CartRow>),
}

/// Everything the UI needs to draw the badge and the cart modal.
///
/// Derived from stored items only; building it twice from the same cart yields the same view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub badge: Badge,
    pub body: CartBody,
    pub modal_open: bool,
}

impl CartView {
    pub fn from_items(items: &[CartItem], modal_open: bool) -> Self {
        let body = if items.is_empty() {
            CartBody::Empty
        } else {
            CartBody::Items(items.iter().map(CartRow::from_item).collect())
        };
        Self {
            badge: Badge::for_count(items.len()),
            body,
            modal_open,
        }
    }
}

impl Badge {
    pub fn for_count(count: usize) -> Self {
        Self { count, visible: count > 0 }
    }
}

impl CartRow {
    fn from_item(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            thumbnail: item
                .images
                .first()
                .filter(|path| !path.is_empty())
                .cloned()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }
}
