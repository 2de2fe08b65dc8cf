pub mod entities;
pub mod ports;
pub mod services;

pub use entities::Category;
pub use ports::{CategoryRepository, CategoryService};
