//! CSV export with the fixed quote column order

use std::path::Path;

use anyhow::Context;

use nsedl_market_data::{QuoteRow, COLUMNS};

/// Write all rows to `path` under the standard column header.
pub fn write_csv(path: &Path, rows: &[QuoteRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path).context("Failed to create CSV writer")?;
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
