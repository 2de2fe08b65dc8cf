pub mod get_shopping_history;
pub mod get_user;
pub mod get_wishlist;
pub mod search_users;
