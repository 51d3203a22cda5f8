pub mod models;
pub mod pii;

pub use models::events::{EnquiryReceivedEvent, QuotationSavedEvent};
pub use models::product::ProductDescriptor;
pub use pii::{mask_email, mask_mobile, Masked};
