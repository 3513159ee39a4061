//! Currency and percentage formatting for labels, tooltips and table cells.

/// Format a cost as whole dollars with thousands separators, e.g. `$12,345`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// Format a relative change as a signed whole percentage, e.g. `+12%`.
///
/// `None` (no previous cost to compare against) renders as `∞`.
pub fn format_change(ratio: Option<f64>) -> String {
    match ratio {
        None => "∞".to_string(),
        Some(r) if !r.is_finite() => "∞".to_string(),
        Some(r) => {
            let pct = (r * 100.0).round();
            if pct > 0.0 {
                format!("+{}%", pct as i64)
            } else {
                // avoid "-0%"
                format!("{}%", pct as i64)
            }
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.6), "$1,234,568");
        assert_eq!(format_currency(-4200.0), "-$4,200");
        assert_eq!(format_currency(f64::NAN), "-");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(0.125)), "+13%");
        assert_eq!(format_change(Some(-0.03)), "-3%");
        assert_eq!(format_change(Some(0.0)), "0%");
        assert_eq!(format_change(Some(-0.001)), "0%");
        assert_eq!(format_change(None), "∞");
    }
}
