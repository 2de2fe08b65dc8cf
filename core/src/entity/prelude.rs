pub use super::categories::Entity as Categories;
pub use super::orders::Entity as Orders;
pub use super::products::Entity as Products;
pub use super::size_product::Entity as SizeProduct;
pub use super::sizes::Entity as Sizes;
pub use super::users::Entity as Users;
pub use super::wishlists::Entity as Wishlists;
