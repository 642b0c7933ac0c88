// Service exports
pub mod catalog;
pub mod favorites;

pub use catalog::{load_catalog, CatalogError};
pub use favorites::{FavoritesStore, FileStore, KeyValueStore, MemoryStore, StoreError};
