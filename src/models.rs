pub mod config;
pub mod errors;
pub mod filter;
pub mod product;
pub mod status;
