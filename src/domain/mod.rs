//! Domain Layer
//!
//! Pure data-management logic for asset records and their mappings.
//!
//! ## Structure
//!
//! - `entities/` - Asset records, mappings and the in-memory registry
//! - `value_objects/` - Identifiers, status, side and delete policy
//! - `services/` - Mapping engine, report builder, text cleaner
//! - `ports/` - Interface definitions for infrastructure
//!
//! This layer never touches the file system; all I/O goes through `ports`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
