pub mod events;
pub mod product;
