//! Clean Use Case
//!
//! Strips invisible characters from a text file.
//!
//! This module handles:
//! - Reading the source file
//! - Running the text cleaner and collecting per-character counts
//! - Writing the result atomically, or only reporting in check mode

mod options;
mod result;
mod use_case;

pub use options::CleanOptions;
pub use result::CleanResult;
pub use use_case::CleanUseCase;
