//! Number formatting for metric cards and table cells.
//!
//! All formatters use US conventions: `,` thousands separator, `.` decimal point.

/// Formats `amount` as US dollars with up to two fraction digits.
///
/// Trailing zero cents are dropped, matching how the dashboard shows totals.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::ui::format_currency;
///
/// assert_eq!(format_currency(4754.5), "$4,754.5");
/// assert_eq!(format_currency(3680.0), "$3,680");
/// assert_eq!(format_currency(-79.49), "-$79.49");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    match cents % 100 {
        0 => format!("{sign}${whole}"),
        frac if frac % 10 == 0 => format!("{sign}${whole}.{}", frac / 10),
        frac => format!("{sign}${whole}.{frac:02}"),
    }
}

/// Abbreviates large counts with a `K` or `M` suffix and one decimal.
///
/// Values below 1,000 are printed as is.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::ui::format_number;
///
/// assert_eq!(format_number(5231.0), "5.2K");
/// assert_eq!(format_number(12_000_000.0), "12.0M");
/// assert_eq!(format_number(72.0), "72");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Formats a percentage change with an explicit sign and two decimals.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::ui::format_percentage;
///
/// assert_eq!(format_percentage(20.1), "+20.10%");
/// assert_eq!(format_percentage(-2.1), "-2.10%");
/// ```
#[must_use]
pub fn format_percentage(value: f64) -> String {
    // -0.0 would otherwise print as "+-0.00%"
    let value = if value == 0.0 { 0.0 } else { value };
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
