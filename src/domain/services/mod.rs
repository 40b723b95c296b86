//! Domain Services
//!
//! Pure logic that operates on domain entities. No I/O.

mod mapping_engine;
pub mod report;
mod text_cleaner;

pub use mapping_engine::{DanglingMapping, MappingEngine};
pub use report::{build_report, Cell, Report, Sheet};
pub use text_cleaner::{clean_text, is_invisible, CleanReport, INVISIBLE_CHARS};
