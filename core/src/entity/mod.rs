//! `SeaORM` entities for the storefront schema.

pub mod prelude;

pub mod categories;
pub mod orders;
pub mod products;
pub mod size_product;
pub mod sizes;
pub mod users;
pub mod wishlists;
