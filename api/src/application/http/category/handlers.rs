pub mod get_categories;
