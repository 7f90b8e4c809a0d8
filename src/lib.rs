pub mod app;
pub mod client;
pub mod models;
pub mod store;
pub mod utils;
pub mod view;
