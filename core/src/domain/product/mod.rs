pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{Product, ShoppingHistoryItem};
pub use ports::{ProductRepository, ProductService};
