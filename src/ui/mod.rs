//! Terminal output for the assetmap binary

pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod table;
pub mod terminal;
pub mod theme;
pub mod views;
