pub mod get_product;
pub mod search_products;
