//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json;

pub use json::{
    CollectionPaths, JsonCollectionRepository, DEFAULT_FINANCIAL_FILE, DEFAULT_MAPPING_FILE,
    DEFAULT_PHYSICAL_FILE,
};
