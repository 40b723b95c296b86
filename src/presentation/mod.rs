//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating sessions and use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates sessions and use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use assetmap::presentation::factory;
//!
//! let mut session = factory::create_session(&config)?;
//! let pruned = session.prune_dangling()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::create_session;
