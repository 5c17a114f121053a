use crate::domain::model::ExtractedRow;
use crate::utils::error::{EtlError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Renders rows as CSV with the fixed six-column header.
///
/// The header is always written, so an empty slice yields a header-only file.
pub fn render_csv(rows: &[ExtractedRow]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(ExtractedRow::HEADERS)?;
    for row in rows {
        writer.write_record(row.as_record())?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}
