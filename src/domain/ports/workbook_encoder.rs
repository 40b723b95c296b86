//! WorkbookEncoder port - turns a report into spreadsheet bytes

use crate::domain::services::Report;
use crate::error::AssetMapResult;

pub trait WorkbookEncoder {
    /// File extension of the produced format, without the dot
    fn extension(&self) -> &'static str;

    /// Encode every sheet of `report`; errors are `AssetMapError::Export`
    fn encode(&self, report: &Report) -> AssetMapResult<Vec<u8>>;
}
