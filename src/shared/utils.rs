//! Utility functions and helpers

use rust_decimal::Decimal;

/// Extract the numeric value buried in a formatted display figure such as
/// `"$12.4M"`, `"24.5%"` or `"+2.4%"`. Currency, percent, thousands and
/// magnitude symbols are stripped, not scaled.
pub fn figure_value(figure: &str) -> Decimal {
    let cleaned: String = figure
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(Decimal::ZERO)
}

/// Format a value as a two-decimal USD figure
pub fn format_usd(value: Decimal) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_figure_value_currency() {
        assert_eq!(figure_value("$12.4M"), dec!(12.4));
        assert_eq!(figure_value("$800K"), dec!(800));
        assert_eq!(figure_value("$5,700"), dec!(5700));
    }

    #[test]
    fn test_figure_value_percent() {
        assert_eq!(figure_value("24.5%"), dec!(24.5));
        assert_eq!(figure_value("+2.4%"), dec!(2.4));
        assert_eq!(figure_value("-1.2%"), dec!(-1.2));
    }

    #[test]
    fn test_figure_value_garbage() {
        assert_eq!(figure_value(""), Decimal::ZERO);
        assert_eq!(figure_value("n/a"), Decimal::ZERO);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(1833.333)), "$1833.33");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }
}
