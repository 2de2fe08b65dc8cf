pub mod health;
pub mod readness;
