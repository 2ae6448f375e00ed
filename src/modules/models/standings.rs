use std::cmp::Ordering;

use log::info;
use serde::Serialize;

use crate::modules::grammar;
use crate::modules::models::driver::Driver;
use crate::modules::models::roster::Roster;

/// Everything the renderers need: the event name, the ranked drivers, the
/// entered competitors with no results, and the widest driver name for
/// fixed-width layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceResults {
    pub event_name: String,
    pub drivers: Vec<Driver>,
    pub missing: Vec<String>,
    pub longest_name_len: usize,
}

/// Parses one results dump into ranked standings.
///
/// Blocks for non-entered racing numbers are dropped, the rest are built into
/// records, stable-sorted and numbered. Deterministic: the same dump and
/// roster always produce the same standings.
pub fn build_standings(src: &str, roster: &Roster, championship: &str) -> RaceResults {
    let event_name = match grammar::event_title(src) {
        Some(title) => format!("{championship} - {title}"),
        None => championship.to_string(),
    };

    let mut drivers: Vec<Driver> = Vec::new();
    let mut longest_name_len = 0;

    for block in grammar::driver_blocks(src) {
        if let Some(driver) = Driver::from_block(block, roster) {
            // Drives the driver-name column width in the text output.
            longest_name_len = longest_name_len.max(driver.name.len());
            drivers.push(driver);
        }
    }

    // sort_by is stable, so equal drivers keep their extraction order.
    drivers.sort_by(compare);
    assign_positions(&mut drivers);

    let missing = roster.missing_from(&drivers);
    info!(target: "standings", "ranked {} drivers, {} entrants without results", drivers.len(), missing.len());

    RaceResults {
        event_name,
        drivers,
        missing,
        longest_name_len,
    }
}

/// Standings order, best first.
///
/// The first rule means a driver who set a qualifying time always ranks above
/// one who never did. Its "both unset" case shadows the second rule; that
/// overlap matches the long-standing results sheets, so it stays.
fn compare(a: &Driver, b: &Driver) -> Ordering {
    if a.qualify.is_zero() || b.qualify.is_zero() {
        match b.qualify.cmp(&a.qualify) {
            // Both unset: decided by the run/percentage rules below.
            Ordering::Equal => {}
            ord => return ord,
        }
    } else if a.percentage == 0.0 && b.percentage == 0.0 {
        // Nobody scored yet: faster qualifying time ranks higher.
        return a.qualify.cmp(&b.qualify);
    }

    if a.runs == b.runs {
        return b
            .percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal);
    }

    b.runs.cmp(&a.runs)
}

/// Standard competition ranking over the sorted drivers: tied drivers share
/// a position, and the next distinct position skips ahead by the size of the
/// tie group (1st, =2nd, =2nd, 4th).
fn assign_positions(drivers: &mut [Driver]) {
    for i in 0..drivers.len() {
        if i >= 1 && tied(&drivers[i], &drivers[i - 1]) {
            drivers[i].position = drivers[i - 1].position;
            drivers[i].shared = true;
        } else {
            drivers[i].position = (i + 1) as u32;
            drivers[i].shared = i + 1 < drivers.len() && tied(&drivers[i], &drivers[i + 1]);
        }
    }
}

fn tied(a: &Driver, b: &Driver) -> bool {
    a.percentage == b.percentage && a.runs == b.runs && a.laps == b.laps
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    fn driver(number: &str, qualify: f64, percentage: f64, runs: u32, laps: u32) -> Driver {
        Driver {
            race_number: number.to_string(),
            name: format!("Driver {number}"),
            qualify: Duration::from_secs_f64(qualify),
            fastest: Duration::ZERO,
            slowest: Duration::ZERO,
            percentage,
            runs,
            laps,
            position: 0,
            shared: false,
        }
    }

    #[rstest]
    // A set qualifying time ranks above an unset one, either way around.
    #[case(driver("1", 0.0, 0.0, 0, 0), driver("2", 29.5, 101.0, 1, 4), Ordering::Greater)]
    #[case(driver("1", 29.5, 101.0, 1, 4), driver("2", 0.0, 0.0, 0, 0), Ordering::Less)]
    // Neither driver scored: faster qualifying wins.
    #[case(driver("1", 31.0, 0.0, 0, 0), driver("2", 29.5, 0.0, 0, 0), Ordering::Greater)]
    #[case(driver("1", 29.5, 0.0, 0, 0), driver("2", 31.0, 0.0, 0, 0), Ordering::Less)]
    // Equal runs: higher percentage wins.
    #[case(driver("1", 29.5, 101.2, 2, 8), driver("2", 30.0, 102.9, 2, 8), Ordering::Greater)]
    // Different runs: more runs wins, whatever the percentage.
    #[case(driver("1", 29.5, 110.0, 1, 4), driver("2", 30.0, 101.0, 2, 8), Ordering::Greater)]
    // Both qualifying times unset: decided by runs.
    #[case(driver("1", 0.0, 0.0, 1, 2), driver("2", 0.0, 0.0, 2, 5), Ordering::Greater)]
    #[case(driver("1", 0.0, 0.0, 1, 2), driver("2", 0.0, 0.0, 1, 3), Ordering::Equal)]
    fn comparator_rules(#[case] a: Driver, #[case] b: Driver, #[case] expected: Ordering) {
        assert_eq!(compare(&a, &b), expected);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut drivers = vec![
            driver("1", 29.5, 101.0, 1, 4),
            driver("2", 29.5, 101.0, 1, 4),
            driver("3", 29.5, 101.0, 1, 4),
        ];
        drivers.sort_by(compare);

        let order: Vec<&str> = drivers.iter().map(|d| d.race_number.as_str()).collect();
        assert_eq!(order, ["1", "2", "3"]);
    }

    #[test]
    fn tie_group_shares_position_and_next_skips_ahead() {
        let mut drivers = vec![
            driver("1", 29.5, 101.0, 1, 4),
            driver("2", 29.5, 101.0, 1, 4),
            driver("3", 29.5, 101.0, 1, 4),
            driver("4", 29.5, 100.0, 1, 4),
        ];
        assign_positions(&mut drivers);

        let ordinals: Vec<String> = drivers.iter().map(Driver::ordinal).collect();
        assert_eq!(ordinals, ["=1st", "=1st", "=1st", "4th"]);
    }

    #[test]
    fn tie_group_mid_field_skips_by_group_size() {
        let mut drivers = vec![
            driver("1", 29.5, 103.0, 1, 4),
            driver("2", 29.5, 101.0, 1, 4),
            driver("3", 29.5, 101.0, 1, 4),
            driver("4", 29.5, 100.0, 1, 4),
        ];
        assign_positions(&mut drivers);

        let positions: Vec<u32> = drivers.iter().map(|d| d.position).collect();
        assert_eq!(positions, [1, 2, 2, 4]);
        let shared: Vec<bool> = drivers.iter().map(|d| d.shared).collect();
        assert_eq!(shared, [false, true, true, false]);
    }

    #[test]
    fn equal_percentage_but_different_laps_is_not_a_tie() {
        let mut drivers = vec![
            driver("1", 29.5, 101.0, 1, 5),
            driver("2", 29.5, 101.0, 1, 4),
        ];
        assign_positions(&mut drivers);

        assert_eq!(drivers[0].position, 1);
        assert!(!drivers[0].shared);
        assert_eq!(drivers[1].position, 2);
        assert!(!drivers[1].shared);
    }

    #[test]
    fn builds_standings_from_raw_text() {
        let src = "Club Sprint Round 1\n\
                   45 Jane Doe 0:30.1000 0:29.5000 -:--.---- 0:31.2000 0:30.8000 \n\
                   7 Bob O'Brien 0:31.0000 -:--.---- 0:32.0000 0:31.5000 0:31.9000 \n\
                   12 Sam Hill 0:33.0000 \n";
        let roster = Roster::parse("45 7 12 99");

        let results = build_standings(src, &roster, "All Triumph Challenge");

        assert_eq!(
            results.event_name,
            "All Triumph Challenge - Club Sprint Round 1"
        );
        assert_eq!(results.drivers.len(), 3);
        assert_eq!(results.missing, ["99"]);
        assert_eq!(results.longest_name_len, "Bob O'Brien".len());

        // Scored drivers first by percentage, qualifying-only driver last.
        assert_eq!(results.drivers[0].race_number, "45");
        assert_eq!(results.drivers[1].race_number, "7");
        assert_eq!(results.drivers[2].race_number, "12");
        assert_eq!(results.drivers[0].position, 1);
        assert_eq!(results.drivers[2].position, 3);
    }
}
