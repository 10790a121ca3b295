//! Amount rendering for the shell: sign prefix, fixed precision, and
//! thousands grouping, driven by the configured separators.

use crate::config::Config;

/// Renders a magnitude with a leading `+` or `-`.
///
/// The sign comes from the item kind (income `+`, expense `-`) or, for the
/// net budget, from its own sign; the stored value is always a magnitude.
pub fn format_signed_amount(value: f64, negative: bool, config: &Config) -> String {
    let sign = if negative { '-' } else { '+' };
    format!("{} {}", sign, format_amount(value.abs(), config))
}

/// Renders `value` with the configured precision and separators.
pub fn format_amount(value: f64, config: &Config) -> String {
    let mut body = format!("{:.*}", config.precision as usize, value);
    if config.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &config.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(config.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, config.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, config.grouping_separator);
    }
    body
}

/// Renders a computed share, `---` while the sentinel is unset.
pub fn format_percentage(percentage: Option<u32>) -> String {
    match percentage {
        Some(value) => format!("{value}%"),
        None => "---".into(),
    }
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_follow_the_caller_not_the_value() {
        let config = Config::default();
        assert_eq!(format_signed_amount(1250.0, false, &config), "+ 1,250.00");
        assert_eq!(format_signed_amount(45.5, true, &config), "- 45.50");
        // magnitudes only: a negative net budget arrives as (value, negative=true)
        assert_eq!(format_signed_amount(-10.0, true, &config), "- 10.00");
    }

    #[test]
    fn grouping_and_precision_come_from_config() {
        let config = Config {
            decimal_separator: ',',
            grouping_separator: '.',
            precision: 1,
        };
        assert_eq!(format_amount(1234567.89, &config), "1.234.567,9");
    }

    #[test]
    fn zero_precision_still_groups() {
        let config = Config {
            precision: 0,
            ..Config::default()
        };
        assert_eq!(format_amount(100000.0, &config), "100,000");
    }

    #[test]
    fn percentage_sentinel_renders_as_dashes() {
        assert_eq!(format_percentage(Some(20)), "20%");
        assert_eq!(format_percentage(None), "---");
    }
}
