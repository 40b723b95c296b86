//! XLSX encoder backed by `rust_xlsxwriter`

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};

use crate::domain::ports::WorkbookEncoder;
use crate::domain::services::{Cell, Report};
use crate::error::{AssetMapError, AssetMapResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxEncoder;

impl XlsxEncoder {
    pub fn new() -> Self {
        Self
    }

    fn build(&self, report: &Report) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        for sheet in &report.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name)?;

            for (c, title) in sheet.header.iter().enumerate() {
                worksheet.write_string_with_format(0, col(c)?, *title, &bold)?;
            }
            worksheet.set_freeze_panes(1, 0)?;

            for (r, cells) in sheet.rows.iter().enumerate() {
                let row = RowNum::try_from(r + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
                for (c, cell) in cells.iter().enumerate() {
                    match cell {
                        Cell::Text(text) => {
                            worksheet.write_string(row, col(c)?, text)?;
                        }
                        Cell::Number(number) => {
                            worksheet.write_number(row, col(c)?, *number)?;
                        }
                        Cell::Empty => {}
                    }
                }
            }
            worksheet.autofit();
        }

        workbook.save_to_buffer()
    }
}

fn col(index: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

impl WorkbookEncoder for XlsxEncoder {
    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn encode(&self, report: &Report) -> AssetMapResult<Vec<u8>> {
        let bytes = self
            .build(report)
            .map_err(|e| AssetMapError::export(e.to_string()))?;
        tracing::debug!(bytes = bytes.len(), sheets = report.sheets.len(), "workbook encoded");
        Ok(bytes)
    }
}
