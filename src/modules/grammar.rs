use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{MalformedLapTimeSnafu, Result};

/// How many decimal places the timing system uses for fractional seconds.
pub const DECIMAL_PLACES: usize = 4;

const RACING_NUMBER: &str = r"\d{1,3}";
const DRIVER_NAME: &str = r"[a-z A-Z/\-']+";

/// `*:**.****` or `-:--.----`, a lap with no recorded time.
static MISSING_LAP_PATTERN: Lazy<String> = Lazy::new(|| {
    format!(
        r"\*:\*{{2}}\.\*{{{n}}}|-:-{{2}}\.-{{{n}}}",
        n = DECIMAL_PLACES
    )
});

/// A timed lap like `0:56.1234`, or a missing-lap marker.
static LAP_TOKEN_PATTERN: Lazy<String> = Lazy::new(|| {
    format!(
        r"(\d:\d{{2}}\.\d{{{n}}}|{missing})",
        n = DECIMAL_PLACES,
        missing = *MISSING_LAP_PATTERN
    )
});

/// A whole block of lap times belonging to one driver: racing number, name
/// words, then lap tokens interleaved with the lap-count markers (10, 20, ...)
/// the timing system prints. Lap tokens may carry a single-letter pit
/// annotation.
static DRIVER_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?m)^ *{num}( {name})+ +((\s*\d{{1,2}}0 )*({lap}[ p])*)*",
        num = RACING_NUMBER,
        name = DRIVER_NAME,
        lap = *LAP_TOKEN_PATTERN
    ))
    .unwrap()
});

static LAP_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(&LAP_TOKEN_PATTERN).unwrap());
static MISSING_LAP: Lazy<Regex> = Lazy::new(|| Regex::new(&MISSING_LAP_PATTERN).unwrap());
static RACING_NUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{RACING_NUMBER} ")).unwrap());
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(DRIVER_NAME).unwrap());

/// The event title is the first non-blank line of the results dump.
pub fn event_title(src: &str) -> Option<&str> {
    src.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Every driver block in the buffer, in the order they appear. Blocks do not
/// need to be separated by blank lines.
pub fn driver_blocks(src: &str) -> Vec<&str> {
    DRIVER_BLOCK.find_iter(src).map(|m| m.as_str()).collect()
}

/// Whether the buffer contains at least one driver block. Used to decide if
/// an acquired piece of text is worth parsing at all.
pub fn contains_results(src: &str) -> bool {
    DRIVER_BLOCK.is_match(src)
}

/// The racing number leading a driver block.
pub fn racing_number(block: &str) -> Option<&str> {
    RACING_NUM.find(block).map(|m| m.as_str().trim())
}

/// The driver name words following the racing number.
pub fn driver_name(rest: &str) -> Option<&str> {
    NAME.find(rest).map(|m| m.as_str().trim())
}

/// All lap tokens (timed or missing) in a block remainder, left to right.
pub fn lap_tokens(src: &str) -> Vec<&str> {
    LAP_TOKEN.find_iter(src).map(|m| m.as_str()).collect()
}

pub fn is_missing_lap(token: &str) -> bool {
    MISSING_LAP.is_match(token)
}

/// Parses a `m:ss.ffff` lap token into a duration.
pub fn parse_lap_time(token: &str) -> Result<Duration> {
    let (minutes, seconds) = token
        .split_once(':')
        .ok_or_else(|| MalformedLapTimeSnafu { token }.build())?;

    let minutes = minutes
        .parse::<u64>()
        .ok()
        .ok_or_else(|| MalformedLapTimeSnafu { token }.build())?;
    let seconds = seconds
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .ok_or_else(|| MalformedLapTimeSnafu { token }.build())?;

    Ok(Duration::from_secs_f64(minutes as f64 * 60.0 + seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_first_non_blank_line() {
        let src = "\n   \n  Round 3 - Winton   \n45 Jane Doe 0:59.1234\n";
        assert_eq!(event_title(src), Some("Round 3 - Winton"));
        assert_eq!(event_title("\n \n"), None);
    }

    #[test]
    fn finds_every_block_without_blank_line_separators() {
        let src = "Event\n45 Jane Doe 0:59.1234 0:58.0000 \n7 Bob O'Brien 1:02.4000 -:--.---- \n";
        let blocks = driver_blocks(src);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("Jane Doe"));
        assert!(blocks[1].contains("O'Brien"));
    }

    #[test]
    fn block_allows_lap_count_markers_and_pit_annotation() {
        let src = "Event\n45 Jane Doe 10 0:59.1234 20 0:58.0000p 0:57.9000 \n";
        let blocks = driver_blocks(src);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            lap_tokens(blocks[0]),
            vec!["0:59.1234", "0:58.0000", "0:57.9000"]
        );
    }

    #[test]
    fn both_filler_characters_mark_a_missing_lap() {
        assert!(is_missing_lap("*:**.****"));
        assert!(is_missing_lap("-:--.----"));
        assert!(!is_missing_lap("0:59.1234"));
    }

    #[test]
    fn extracts_number_and_name() {
        let block = "45 Jane Doe 0:59.1234 ";
        assert_eq!(racing_number(block), Some("45"));
        assert_eq!(driver_name(&block[3..]), Some("Jane Doe"));
    }

    #[test]
    fn parses_lap_times() {
        assert_eq!(
            parse_lap_time("0:29.5000").unwrap(),
            Duration::from_secs_f64(29.5)
        );
        assert_eq!(
            parse_lap_time("1:02.2500").unwrap(),
            Duration::from_secs_f64(62.25)
        );
    }

    #[test]
    fn rejects_malformed_lap_times() {
        assert!(parse_lap_time("*:**.****").is_err());
        assert!(parse_lap_time("59.1234").is_err());
        assert!(parse_lap_time("a:bc.defg").is_err());
    }
}
