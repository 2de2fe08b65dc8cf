pub mod category;
pub mod common;
pub mod health;
pub mod product;
pub mod search;
pub mod user;
