use crate::item::CartItem;

pub const EMPTY_CART_MESSAGE: &str = "Hello,\n\nI would like to inquire about your tiles products.";
const GREETING: &str = "Hello,\n\nI am interested in the following tiles:\n\n";
const CALL_TO_ACTION: &str = "Please share best price and availability.\nThank you!";

/// Text sent to the showroom: numbered item names, each followed by its image links.
pub fn outbound_message(items: &[CartItem], website_url: &str) -> String {
    if items.is_empty() {
        return EMPTY_CART_MESSAGE.to_string();
    }

    let mut message = String::from(GREETING);
    for (index, item) in items.iter().enumerate() {
        message.push_str(&format!("{}. {}\n", index + 1, item.name));
        for image in &item.images {
            message.push_str(&resolve_image_url(website_url, image));
            message.push('\n');
        }
        message.push('\n');
    }
    message.push_str(CALL_TO_ACTION);
    message
}

/// Absolute URL for an image path as written in the page markup.
pub fn resolve_image_url(website_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = website_url.trim_end_matches('/');
    let relative = path.trim_start_matches("./").trim_start_matches('/');
    format!("{}/{}", base, relative)
}

/// `https://wa.me/<number>?text=<encoded>`
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
}

/// One-off enquiry for a single product card, outside the cart.
pub fn product_enquiry_message(product_name: &str) -> String {
    format!(
        "Hi, I'm interested in {}. Please provide more details and pricing.",
        product_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(id: &str, name: &str, images: &[&str]) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "Tiles".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            page_url: String::new(),
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_cart_message() {
        assert_eq!(outbound_message(&[], "https://x.com/"), EMPTY_CART_MESSAGE);
    }

    #[test]
    fn test_message_layout() {
        let items = vec![
            item("a", "KAG Parking", &["assets/images/kag.jpg", "assets/images/kag-2.jpg"]),
            item("b", "Black Galaxy", &[]),
        ];
        let message = outbound_message(&items, "https://shriselvamtiles.com/");
        assert_eq!(
            message,
            "Hello,\n\nI am interested in the following tiles:\n\n\
             1. KAG Parking\n\
             https://shriselvamtiles.com/assets/images/kag.jpg\n\
             https://shriselvamtiles.com/assets/images/kag-2.jpg\n\n\
             2. Black Galaxy\n\n\
             Please share best price and availability.\nThank you!"
        );
    }

    #[test]
    fn test_names_appear_once_in_order() {
        let items = vec![item("1", "Rafale", &[]), item("2", "Kota Stone", &[]), item("3", "Jet Black", &[])];
        let message = outbound_message(&items, "https://x.com");
        let positions: Vec<usize> = ["Rafale", "Kota Stone", "Jet Black"]
            .iter()
            .map(|name| {
                assert_eq!(message.matches(name).count(), 1);
                message.find(name).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_resolve_image_url() {
        assert_eq!(resolve_image_url("https://x.com/", "a/b.jpg"), "https://x.com/a/b.jpg");
        assert_eq!(resolve_image_url("https://x.com", "/a/b.jpg"), "https://x.com/a/b.jpg");
        assert_eq!(resolve_image_url("https://x.com/", "./a.jpg"), "https://x.com/a.jpg");
        assert_eq!(resolve_image_url("https://x.com/", "https://cdn/a.jpg"), "https://cdn/a.jpg");
    }

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let link = whatsapp_link("+91 99429 29527", "Hi & bye\n1. Tile");
        assert_eq!(link, "https://wa.me/919942929527?text=Hi%20%26%20bye%0A1.%20Tile");
    }

    #[test]
    fn test_product_enquiry_message() {
        assert_eq!(
            product_enquiry_message("Kota Stone"),
            "Hi, I'm interested in Kota Stone. Please provide more details and pricing."
        );
    }
}
