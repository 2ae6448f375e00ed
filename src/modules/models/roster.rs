use serde::Serialize;

use crate::modules::models::driver::Driver;

/// The racing numbers entered for the event. Supplied externally, read-only
/// while results are parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    numbers: Vec<String>,
}

impl Roster {
    /// Parses racing numbers separated by spaces or newlines. Lines prefixed
    /// with `#` are commented out. Duplicates are dropped case-insensitively,
    /// keeping first-seen order.
    pub fn parse(src: &str) -> Roster {
        let mut numbers: Vec<String> = Vec::new();

        for line in src.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }

            for word in line.split_whitespace() {
                if !numbers.iter().any(|n| n.eq_ignore_ascii_case(word)) {
                    numbers.push(word.to_string());
                }
            }
        }

        Roster { numbers }
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn contains(&self, number: &str) -> bool {
        self.numbers.iter().any(|n| n.eq_ignore_ascii_case(number))
    }

    /// Every entered number with no accepted record, in roster order.
    pub fn missing_from(&self, drivers: &[Driver]) -> Vec<String> {
        self.numbers
            .iter()
            .filter(|number| {
                !drivers
                    .iter()
                    .any(|d| d.race_number.eq_ignore_ascii_case(number))
            })
            .cloned()
            .collect()
    }

    /// Space-separated form, the layout of the competitors file.
    pub fn to_line(&self) -> String {
        self.numbers.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_across_lines_and_spaces() {
        let roster = Roster::parse("45 99\n7a\n");
        assert_eq!(roster.numbers(), ["45", "99", "7a"]);
    }

    #[test]
    fn skips_commented_lines_and_duplicates() {
        let roster = Roster::parse("45 99 45\n# 12 sat this one out\n7A 7a");
        assert_eq!(roster.numbers(), ["45", "99", "7A"]);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let roster = Roster::parse("7a");
        assert!(roster.contains("7A"));
        assert!(!roster.contains("8a"));
    }

    #[test]
    fn missing_follows_roster_order() {
        let roster = Roster::parse("45 99 12");
        let drivers = vec![driver("99")];
        assert_eq!(roster.missing_from(&drivers), ["45", "12"]);
    }

    #[test]
    fn nothing_missing_when_all_have_records() {
        let roster = Roster::parse("45");
        let drivers = vec![driver("45")];
        assert!(roster.missing_from(&drivers).is_empty());
    }

    fn driver(race_number: &str) -> Driver {
        Driver {
            race_number: race_number.to_string(),
            name: "Some Driver".to_string(),
            qualify: std::time::Duration::ZERO,
            fastest: std::time::Duration::ZERO,
            slowest: std::time::Duration::ZERO,
            percentage: 0.0,
            runs: 0,
            laps: 0,
            position: 0,
            shared: false,
        }
    }
}
