pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::Catalog;
