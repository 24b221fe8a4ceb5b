pub mod collation;
pub mod config;
pub mod error;
pub mod record;
