//! Workbook encoders

mod xlsx;

pub use xlsx::XlsxEncoder;
