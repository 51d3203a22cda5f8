//! UI adapter: page events arrive as [`CartCommand`]s and leave as a fresh [`CartView`].

use selvam_shared::ProductDescriptor;

use crate::manager::CartManager;
use crate::view::CartView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    AddToCart(ProductDescriptor),
    RemoveItem(String),
    ClearCart,
    OpenCart,
    CloseCart,
    SendToWhatsApp,
    /// Escape key anywhere on the page.
    Escape,
}

/// What the page must do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub view: CartView,
    /// Deep link to open in a new tab.
    pub open_url: Option<String>,
}

pub struct CartController {
    manager: CartManager,
}

impl CartController {
    pub fn new(manager: CartManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &CartManager {
        &self.manager
    }

    pub fn dispatch(&mut self, command: CartCommand) -> CommandOutcome {
        match command {
            CartCommand::AddToCart(product) => self.on_add_to_cart(&product),
            CartCommand::RemoveItem(id) => self.on_remove_item(&id),
            CartCommand::ClearCart => self.on_clear_cart(),
            CartCommand::OpenCart => self.on_open_cart(),
            CartCommand::CloseCart | CartCommand::Escape => self.on_close_cart(),
            CartCommand::SendToWhatsApp => self.on_send_to_whatsapp(),
        }
    }

    pub fn on_add_to_cart(&mut self, product: &ProductDescriptor) -> CommandOutcome {
        self.manager.add_to_cart(product);
        self.rendered()
    }

    pub fn on_remove_item(&mut self, id: &str) -> CommandOutcome {
        self.manager.remove_from_cart(id);
        self.rendered()
    }

    pub fn on_clear_cart(&mut self) -> CommandOutcome {
        self.manager.clear_cart();
        self.rendered()
    }

    pub fn on_open_cart(&mut self) -> CommandOutcome {
        self.manager.open_modal();
        self.rendered()
    }

    pub fn on_close_cart(&mut self) -> CommandOutcome {
        self.manager.close_modal();
        self.rendered()
    }

    pub fn on_send_to_whatsapp(&mut self) -> CommandOutcome {
        let open_url = self.manager.send_to_whatsapp();
        CommandOutcome {
            view: self.manager.render(),
            open_url,
        }
    }

    fn rendered(&self) -> CommandOutcome {
        CommandOutcome {
            view: self.manager.render(),
            open_url: None,
        }
    }
}

/// What a product details page exposes: its query string and the product markup.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
    /// `location.search`, with or without the leading `?`.
    pub query: String,
    pub url: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub main_image: Option<String>,
    pub additional_image: Option<String>,
}

impl ProductPage {
    /// The product shown on this page, if the `product` parameter is present.
    pub fn product(&self) -> Option<ProductDescriptor> {
        let id = query_param(&self.query, "product").filter(|id| !id.is_empty())?;

        let images = [&self.main_image, &self.additional_image]
            .into_iter()
            .flatten()
            .filter(|path| !path.is_empty())
            .cloned()
            .collect();

        Some(ProductDescriptor {
            id,
            name: self.name.clone().unwrap_or_else(|| "Unknown Product".to_string()),
            category: self.category.clone().unwrap_or_else(|| "Tiles".to_string()),
            images,
            page_url: self.url.clone(),
        })
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or(value)
        })
}
