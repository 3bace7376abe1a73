mod catalog;
mod persistence;

pub use catalog::Catalog;
pub use persistence::{load_catalog, load_observations, save_catalog};
