pub mod assets;
pub mod clean;
pub mod mappings;
