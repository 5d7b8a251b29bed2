//! Text helpers for chart legends and tooltips.

use crate::domain::entities::Slice;

/// Longest legend label, in characters, before truncation.
pub const LEGEND_LABEL_MAX: usize = 16;

/// Shortens `label` to at most `max` characters, ending in `…` when cut.
pub fn truncate_label(label: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if label.chars().count() <= max {
        return label.to_string();
    }

    let mut out: String = label.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Legend text for a slice.
pub fn legend_label(slice: &Slice) -> String {
    truncate_label(&slice.name, LEGEND_LABEL_MAX)
}

/// Formats a number with Indian digit grouping (`12,34,567.5`).
///
/// Up to three fractional digits are kept, trailing zeros dropped.
pub fn format_indian(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Tooltip text: `"Mobiles (45.0%)"` plus the formatted value.
pub fn tooltip(slice: &Slice) -> (String, String) {
    (
        format_indian(slice.value),
        format!("{} ({:.1}%)", slice.name, slice.percentage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Gujarat", 16), "Gujarat");
        assert_eq!(truncate_label("Sixteen chars ok", 16), "Sixteen chars ok");
        assert_eq!(
            truncate_label("Andaman and Nicobar Islands", 16),
            "Andaman and Nic…"
        );
        assert_eq!(truncate_label("Andaman and Nicobar Islands", 16).chars().count(), 16);
        assert_eq!(truncate_label("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_label("महाराष्ट्र", 3).chars().count(), 3);
    }

    #[test]
    fn test_format_indian() {
        assert_eq!(format_indian(0.0), "0");
        assert_eq!(format_indian(999.0), "999");
        assert_eq!(format_indian(1000.0), "1,000");
        assert_eq!(format_indian(123456.0), "1,23,456");
        assert_eq!(format_indian(1234567.0), "12,34,567");
        assert_eq!(format_indian(1200.5), "1,200.5");
        assert_eq!(format_indian(-98765.4321), "-98,765.432");
        assert_eq!(format_indian(-0.0001), "0");
    }

    #[test]
    fn test_tooltip() {
        let slice = Slice::new("Mobiles", 123456.0, 45.04);
        assert_eq!(
            tooltip(&slice),
            ("1,23,456".to_string(), "Mobiles (45.0%)".to_string())
        );
    }

    #[test]
    fn test_legend_label() {
        let slice = Slice::new("Other", 1.0, 1.0);
        assert_eq!(legend_label(&slice), "Other");
    }
}
