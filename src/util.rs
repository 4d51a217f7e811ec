// Parsing and formatting helpers.
//
// CSV cleanup lives here so the loader and the pipeline can work with typed
// values; display formatting lives here so the pipeline never sees strings.
use num_format::{Locale, ToFormattedString};

/// Parse a sales amount cell.
///
/// - Missing or blank cells are `Some(0.0)`; an absent amount adds nothing to a sum.
/// - Thousands separators like `","` are stripped.
/// - Scientific notation (`1.2e5`) is accepted; any other letter makes it `None`,
///   as does anything otherwise unparsable.
pub fn parse_amount(s: Option<&str>) -> Option<f64> {
    let s = match s {
        Some(s) => s.trim(),
        None => return Some(0.0),
    };
    if s.is_empty() {
        return Some(0.0);
    }
    if s
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    let s = s.replace(',', "");
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Trimmed identifier, empty when the cell is missing.
pub fn clean_ident(s: Option<String>) -> String {
    s.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Divide, defining any non-positive denominator as a zero ratio.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    let r = numerator / denominator;
    if r.is_finite() {
        r
    } else {
        0.0
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus locale-aware thousands separators, e.g. `1,234,567.89`.
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Render a fraction as a percentage string: `0.9231` becomes `92.31`.
pub fn format_pct(fraction: f64) -> String {
    format_number(fraction * 100.0, 2)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
