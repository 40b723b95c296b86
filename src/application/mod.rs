//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AssetSession` - Loaded state plus every asset and mapping command
//! - `ExportUseCase` - Encode the session into a workbook file
//! - `CleanUseCase` - Strip invisible characters from a text file

pub mod clean;
pub mod export;
pub mod session;

pub use clean::{CleanOptions, CleanResult, CleanUseCase};
pub use export::{ExportResult, ExportUseCase};
pub use session::{AssetSession, DeleteOutcome};
