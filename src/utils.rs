//! Small display helpers shared across components.

use chrono::{DateTime, Utc};

/// Avatar backgrounds for submitted reviews, picked by timestamp so two
/// quick submissions usually land on different colors.
const AVATAR_COLORS: [&str; 6] = [
    "#8b5cf6", "#10b981", "#f59e0b", "#3b82f6", "#ef4444", "#14b8a6",
];

pub fn avatar_color(seed: i64) -> &'static str {
    AVATAR_COLORS[seed.unsigned_abs() as usize % AVATAR_COLORS.len()]
}

/// Up to two uppercase initials for the avatar badge.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// "Mon YYYY" label stamped on a review at submission time.
pub fn month_year(when: DateTime<Utc>) -> String {
    when.format("%b %Y").to_string()
}

/// Thousands separators for download counts.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Five-star row, filled to the nearest whole star.
pub fn star_string(value: f64) -> String {
    let filled = (value.round() as usize).min(5);
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

/// Truncate for table cells, appending an ellipsis when the text was cut.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn initials_takes_first_two_words() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("Jean-Luc Maria Picard"), "JM");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn month_year_label_format() {
        let when = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();
        assert_eq!(month_year(when), "Feb 2026");
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn star_string_rounds_to_whole_stars() {
        assert_eq!(star_string(4.2), "★★★★☆");
        assert_eq!(star_string(4.6), "★★★★★");
        assert_eq!(star_string(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn ellipsize_only_cuts_long_text() {
        assert_eq!(ellipsize("short", 10), "short");
        assert_eq!(ellipsize("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn avatar_color_is_stable_for_a_seed() {
        assert_eq!(avatar_color(42), avatar_color(42));
        assert!(AVATAR_COLORS.contains(&avatar_color(-7)));
    }
}
