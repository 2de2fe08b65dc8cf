pub mod category;
pub mod db;
pub mod health;
pub mod product;
pub mod search;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
