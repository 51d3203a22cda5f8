pub mod product;
pub mod rates;
pub mod filter;

pub use product::{ProductListing, ProductError};
pub use rates::{Rate, RateCard};
pub use filter::{Facet, ListingFilter};
