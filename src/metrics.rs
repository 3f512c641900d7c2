//! Text statistics
//!
//! Pure functions over the textarea contents. Nothing here touches storage
//! or the DOM, so the same numbers come out of the browser and native builds.

use crate::consts::DEFAULT_WPM;

/// Minutes in an hour, used when splitting long reading times
const MINUTES_PER_HOUR: u64 = 60;

/// Number of whitespace-separated words (0 for blank text)
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of lines after trimming; runs of newlines count as one break
pub fn count_lines(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split('\n').filter(|line| !line.is_empty()).count()
}

/// Number of characters, whitespace included
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Estimated reading time for `words` at `wpm` words per minute
///
/// Under an hour the estimate is rounded up to the next whole minute
/// ("1 min", "3 min"). From an hour on it is shown as hours plus whole
/// elapsed minutes ("1h", "1h 1min"). Zero words or a non-positive rate
/// read as "0 min".
pub fn calculate_reading_time(words: usize, wpm: i64) -> String {
    if words == 0 || wpm <= 0 {
        return "0 min".to_string();
    }

    let words = words as u64;
    let wpm = wpm as u64;
    let minutes = words.div_ceil(wpm);

    if minutes < MINUTES_PER_HOUR {
        return format!("{} min", minutes);
    }

    // Anything that rounded up to the hour shows as exactly one hour
    let whole_minutes = (words / wpm).max(MINUTES_PER_HOUR);
    let hours = whole_minutes / MINUTES_PER_HOUR;
    let remainder = whole_minutes % MINUTES_PER_HOUR;

    if remainder == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, remainder)
    }
}

/// Parse the WPM input the way a browser reads an integer field
///
/// Leading whitespace, an optional sign and leading digits are read; any
/// trailing text is ignored. Missing, unparsable or zero values fall back to
/// [`DEFAULT_WPM`]. Negative rates are kept and produce "0 min".
pub fn resolve_wpm(raw: Option<&str>) -> i64 {
    raw.and_then(parse_leading_int)
        .filter(|wpm| *wpm != 0)
        .unwrap_or(DEFAULT_WPM)
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}

/// All statistics for one snapshot of the textarea
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMetrics {
    pub words: usize,
    pub lines: usize,
    pub characters: usize,
    pub reading_time: String,
}

impl TextMetrics {
    /// Measure `text` with a reading speed of `wpm`
    pub fn measure(text: &str, wpm: i64) -> Self {
        let words = count_words(text);
        Self {
            words,
            lines: count_lines(text),
            characters: count_characters(text),
            reading_time: calculate_reading_time(words, wpm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t "), 0);
        assert_eq!(count_words("hello"), 1);
        assert_eq!(count_words("  hello   world \n again "), 3);
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("   "), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\n\nb"), 2);
        assert_eq!(count_lines("\n\na\nb\n\n"), 2);
        // Whitespace-only lines are not blank lines
        assert_eq!(count_lines("a\n \nb"), 3);
    }

    #[test]
    fn test_count_characters_untrimmed() {
        assert_eq!(count_characters(""), 0);
        assert_eq!(count_characters(" a \n"), 4);
        assert_eq!(count_characters("héllo"), 5);
    }

    #[test]
    fn test_reading_time_minutes() {
        assert_eq!(calculate_reading_time(0, 200), "0 min");
        assert_eq!(calculate_reading_time(1, 200), "1 min");
        assert_eq!(calculate_reading_time(200, 200), "1 min");
        assert_eq!(calculate_reading_time(201, 200), "2 min");
        assert_eq!(calculate_reading_time(600, 200), "3 min");
    }

    #[test]
    fn test_reading_time_hours() {
        assert_eq!(calculate_reading_time(12000, 200), "1h");
        assert_eq!(calculate_reading_time(12300, 200), "1h 1min");
        assert_eq!(calculate_reading_time(11990, 200), "1h");
        assert_eq!(calculate_reading_time(24000, 200), "2h");
        assert_eq!(calculate_reading_time(30000, 200), "2h 30min");
    }

    #[test]
    fn test_reading_time_invalid_rate() {
        assert_eq!(calculate_reading_time(100, 0), "0 min");
        assert_eq!(calculate_reading_time(100, -50), "0 min");
    }

    #[test]
    fn test_resolve_wpm() {
        assert_eq!(resolve_wpm(None), DEFAULT_WPM);
        assert_eq!(resolve_wpm(Some("")), DEFAULT_WPM);
        assert_eq!(resolve_wpm(Some("abc")), DEFAULT_WPM);
        assert_eq!(resolve_wpm(Some("0")), DEFAULT_WPM);
        assert_eq!(resolve_wpm(Some("250")), 250);
        assert_eq!(resolve_wpm(Some("  300wpm")), 300);
        assert_eq!(resolve_wpm(Some("+120")), 120);
        assert_eq!(resolve_wpm(Some("-5")), -5);
        assert_eq!(resolve_wpm(Some("-")), DEFAULT_WPM);
    }

    #[test]
    fn test_measure() {
        let m = TextMetrics::measure("hello world\n\nbye", 200);
        assert_eq!(m.words, 3);
        assert_eq!(m.lines, 2);
        assert_eq!(m.characters, 16);
        assert_eq!(m.reading_time, "1 min");
    }

    proptest! {
        #[test]
        fn whitespace_only_has_no_words(s in "[ \t\n\r]*") {
            prop_assert_eq!(count_words(&s), 0);
            prop_assert_eq!(count_lines(&s), 0);
        }

        #[test]
        fn characters_include_whitespace(s in "\\PC*", pad in "[ \n]{0,8}") {
            let padded = format!("{}{}{}", pad, s, pad);
            prop_assert_eq!(
                count_characters(&padded),
                count_characters(&s) + 2 * pad.chars().count()
            );
        }

        #[test]
        fn lines_never_exceed_characters(s in "[a-z \n]{0,64}") {
            // Every counted line holds at least one non-newline character
            prop_assert!(count_lines(&s) <= count_characters(&s));
        }

        #[test]
        fn minutes_round_up_under_an_hour(words in 1usize..=11800) {
            prop_assert_eq!(
                calculate_reading_time(words, 200),
                format!("{} min", words.div_ceil(200))
            );
        }
    }
}
