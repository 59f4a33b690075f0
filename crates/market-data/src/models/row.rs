//! Normalized quote rows and per-symbol fetch outcomes

/// Column order for tabular export, matching [`QuoteRow::to_record`].
pub const COLUMNS: [&str; 22] = [
    "SYMBOL",
    "Company Name",
    "Industry",
    "Sector",
    "Last Price",
    "Change",
    "% Change",
    "Previous Close",
    "Open",
    "Day High",
    "Day Low",
    "VWAP",
    "52W High",
    "52W Low",
    "Traded Volume",
    "Total Market Cap (Cr)",
    "Free Float Market Cap",
    "Price Band (%)",
    "Face Value",
    "ISIN",
    "Listing Date",
    "Delivery %",
];

/// One normalized row per successfully fetched symbol.
///
/// Numeric fields have already been through coercion (missing and `"-"`
/// become zero); optional text fields stay `None` when the response lacks
/// them and render as empty cells on export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteRow {
    pub symbol: String,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub sector: Option<String>,
    pub last_price: f64,
    pub change: f64,
    pub pct_change: f64,
    pub previous_close: f64,
    pub open: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub vwap: f64,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
    pub traded_volume: f64,
    pub total_market_cap_cr: f64,
    pub free_float_market_cap: String,
    pub price_band_pct: String,
    pub face_value: f64,
    pub isin: Option<String>,
    pub listing_date: Option<String>,
    pub delivery_pct: f64,
}

impl QuoteRow {
    /// Cells in [`COLUMNS`] order, ready for CSV serialization.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            self.company_name.clone().unwrap_or_default(),
            self.industry.clone().unwrap_or_default(),
            self.sector.clone().unwrap_or_default(),
            self.last_price.to_string(),
            self.change.to_string(),
            self.pct_change.to_string(),
            self.previous_close.to_string(),
            self.open.to_string(),
            self.day_high.to_string(),
            self.day_low.to_string(),
            self.vwap.to_string(),
            self.fifty_two_week_high.to_string(),
            self.fifty_two_week_low.to_string(),
            self.traded_volume.to_string(),
            self.total_market_cap_cr.to_string(),
            self.free_float_market_cap.clone(),
            self.price_band_pct.clone(),
            self.face_value.to_string(),
            self.isin.clone().unwrap_or_default(),
            self.listing_date.clone().unwrap_or_default(),
            self.delivery_pct.to_string(),
        ]
    }
}

/// Result of a single fetch attempt for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// A row was built from a non-empty main response.
    Success(QuoteRow),
    /// The main endpoint answered 401; the session cookies are stale.
    SessionExpired,
    /// Network error, unparseable body, or empty main response.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_matches_column_count() {
        let row = QuoteRow {
            symbol: "TCS".to_string(),
            ..Default::default()
        };
        assert_eq!(row.to_record().len(), COLUMNS.len());
    }

    #[test]
    fn test_record_cell_formatting() {
        let row = QuoteRow {
            symbol: "TCS".to_string(),
            company_name: Some("Tata Consultancy Services Limited".to_string()),
            last_price: 3704.9,
            traded_volume: 1_520_268.0,
            price_band_pct: "3334.45 - 4075.35".to_string(),
            ..Default::default()
        };
        let record = row.to_record();
        assert_eq!(record[0], "TCS");
        assert_eq!(record[1], "Tata Consultancy Services Limited");
        assert_eq!(record[4], "3704.9");
        // Whole numbers render without a trailing ".0".
        assert_eq!(record[14], "1520268");
        assert_eq!(record[17], "3334.45 - 4075.35");
        // Absent text fields render as empty cells.
        assert_eq!(record[19], "");
    }
}
