//! Field merge for the two NSE quote payloads
//!
//! Folds the main quote payload and the (possibly empty) trade-info payload
//! into one flat [`QuoteRow`]. Some figures move between sections depending
//! on the symbol and the time of day, so the interesting columns are
//! resolved through explicit fallback chains where the first non-empty,
//! non-zero source wins.

use crate::models::payload::{clean_value, Payload};
use crate::models::row::QuoteRow;

/// Marker for a figure the quote endpoints do not expose.
pub const FREE_FLOAT_PLACEHOLDER: &str = "Unavailable (requires separate calculation)";

const CRORE: f64 = 10_000_000.0;

/// Build a row for `symbol`. The caller guarantees `quote` is non-empty;
/// `trade` may be empty, which only narrows field coverage.
pub(crate) fn build_row(symbol: &str, quote: &Payload, trade: &Payload) -> QuoteRow {
    // Delivery figures: the trade-info copy is fresher when present.
    let dp = if trade.has_section("/securityWiseDP") {
        trade
    } else {
        quote
    };

    let traded_volume = clean_value(
        quote
            .present_at("/priceInfo/totalTradedVolume")
            .or_else(|| quote.present_at("/preOpenMarket/totalTradedVolume"))
            .or_else(|| trade.present_at("/marketDeptOrderBook/tradeInfo/totalTradedVolume"))
            .or_else(|| dp.present_at("/securityWiseDP/quantityTraded")),
    );

    QuoteRow {
        symbol: quote
            .text_at("/info/symbol")
            .unwrap_or_else(|| symbol.to_string()),
        company_name: quote.text_at("/info/companyName"),
        industry: quote
            .text_at("/info/industry")
            .or_else(|| quote.text_at("/industryInfo/industry")),
        sector: quote.text_at("/industryInfo/sector"),
        last_price: quote.number_at("/priceInfo/lastPrice"),
        change: quote.number_at("/priceInfo/change"),
        pct_change: quote.number_at("/priceInfo/pChange"),
        previous_close: quote.number_at("/priceInfo/previousClose"),
        open: quote.number_at("/priceInfo/open"),
        day_high: quote.number_at("/priceInfo/intraDayHighLow/max"),
        day_low: quote.number_at("/priceInfo/intraDayHighLow/min"),
        vwap: quote.number_at("/priceInfo/vwap"),
        fifty_two_week_high: quote.number_at("/priceInfo/weekHighLow/max"),
        fifty_two_week_low: quote.number_at("/priceInfo/weekHighLow/min"),
        traded_volume,
        total_market_cap_cr: market_cap_cr(quote, trade),
        free_float_market_cap: FREE_FLOAT_PLACEHOLDER.to_string(),
        price_band_pct: price_band(quote),
        face_value: quote.number_at("/securityInfo/faceValue"),
        isin: quote
            .text_at("/metadata/isin")
            .or_else(|| quote.text_at("/info/isin")),
        listing_date: quote.text_at("/metadata/listingDate"),
        delivery_pct: dp.number_at("/securityWiseDP/deliveryToTradedQuantity"),
    }
}

/// Market cap in crores: the trade-info figure when non-zero, otherwise
/// issued size times last price.
fn market_cap_cr(quote: &Payload, trade: &Payload) -> f64 {
    if let Some(cap) = trade.present_at("/marketDeptOrderBook/tradeInfo/totalMarketCap") {
        return clean_value(Some(cap));
    }
    let computed =
        quote.number_at("/securityInfo/issuedSize") * quote.number_at("/priceInfo/lastPrice")
            / CRORE;
    if computed.is_finite() {
        computed
    } else {
        0.0
    }
}

/// `"lower - upper"` circuit band, zeros when the band is absent.
fn price_band(quote: &Payload) -> String {
    format!(
        "{} - {}",
        quote.number_at("/priceInfo/lowerCP"),
        quote.number_at("/priceInfo/upperCP")
    )
}
