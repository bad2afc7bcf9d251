//! Currency formatting
//!
//! The single currency formatter the system carries. Whole amounts print
//! without decimals ("180"), fractional amounts with two ("172.50"), so
//! template prose reads naturally either way. The "zł" unit lives in the
//! templates, not here.

/// Format a PLN amount for embedding in prose
///
/// # Example
/// ```
/// use pricing_simulator_core::format_pln;
///
/// assert_eq!(format_pln(180.0), "180");
/// assert_eq!(format_pln(172.5), "172.50");
/// ```
pub fn format_pln(amount: f64) -> String {
    // Two-decimal rounding first, so 179.999 prints as "180" not "180.00"
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.2}")
    }
}
