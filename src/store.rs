mod catalog;
pub mod projection;
mod state;

pub use catalog::{CatalogStore, CatalogStoreArgs};
pub use state::ViewState;
