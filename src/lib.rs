pub mod catalog;
pub mod config;
pub mod observability;

pub use config::Config;
