use std::time::Duration;

use log::{debug, warn};
use serde::Serialize;

use crate::modules::grammar;
use crate::modules::models::roster::Roster;

/// A lap time that may not have been recorded yet. Replaces the "slowest
/// possible duration" sentinel the timing dumps imply: a lap is either timed
/// or it is not, and an unset lap never leaks into rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LapTime {
    Unset,
    Timed(Duration),
}

impl LapTime {
    /// Keeps the shorter of the current value and `candidate`. `Unset` loses
    /// to any timed lap.
    fn shorter(self, candidate: Duration) -> LapTime {
        match self {
            LapTime::Timed(current) if current <= candidate => self,
            _ => LapTime::Timed(candidate),
        }
    }

    fn finish(self) -> Duration {
        match self {
            LapTime::Unset => Duration::ZERO,
            LapTime::Timed(d) => d,
        }
    }
}

/// State threaded through the lap-token walk. The lap immediately after a
/// session boundary is a formation/grid lap and must not be timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Normal,
    SkipOne,
}

/// A competitor entered in the event, with the timing stats accumulated from
/// their block of lap tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Driver {
    pub race_number: String,
    pub name: String,
    /// Fastest timed lap during the qualifying/practice session.
    pub qualify: Duration,
    /// Fastest timed race lap, qualifying excluded.
    pub fastest: Duration,
    /// Slowest timed race lap, qualifying excluded.
    pub slowest: Duration,
    /// Handicap score. Zero until at least one race session completed.
    pub percentage: f64,
    /// Race sessions detected after qualifying.
    pub runs: u32,
    /// Timed race laps, qualifying excluded.
    pub laps: u32,
    /// 1-based standing, assigned once the standings are sorted.
    pub position: u32,
    /// Whether the standing is shared with another driver on an equal score.
    pub shared: bool,
}

impl Driver {
    /// Builds a driver record from one matched block of lap times.
    ///
    /// Returns `None` when the racing number is not entered in the event.
    /// A lap token that fails to parse is logged and skipped; it never drops
    /// the whole record.
    pub fn from_block(block: &str, roster: &Roster) -> Option<Driver> {
        let block = block.trim();
        let race_number = grammar::racing_number(block)?;

        // Ignore any entry not in the list of competitors entered for the event.
        if !roster.contains(race_number) {
            debug!(target: "results_parsing", "skipping non-entered racing number {race_number}");
            return None;
        }

        let rest = block.strip_prefix(race_number).unwrap_or(block).trim_start();
        let name = grammar::driver_name(rest)?.to_string();
        let lap_source = rest.strip_prefix(name.as_str()).unwrap_or(rest);

        let tokens = grammar::lap_tokens(lap_source);

        let mut qualify = LapTime::Unset;
        let mut fastest = LapTime::Unset;
        let mut slowest = Duration::ZERO;
        let mut runs: u32 = 0;
        let mut laps: u32 = 0;
        let mut state = WalkState::Normal;

        for (n, token) in tokens.iter().enumerate() {
            if grammar::is_missing_lap(token) {
                // A marker is only a session boundary when a real timed lap
                // follows. Trailing padding at the end of a block stays inert.
                if let Some(next) = tokens.get(n + 1) {
                    if !grammar::is_missing_lap(next) {
                        runs += 1;
                    }
                }

                state = WalkState::SkipOne;
                continue;
            }

            if state == WalkState::SkipOne {
                state = WalkState::Normal;
                continue;
            }

            let lap = match grammar::parse_lap_time(token) {
                Ok(lap) => lap,
                Err(err) => {
                    warn!(target: "lap_parsing", "{err}");
                    continue;
                }
            };

            if runs == 0 {
                // Still in qualifying/practice.
                qualify = qualify.shorter(lap);
            } else {
                // Qualifying laps don't count towards laps completed.
                laps += 1;
                if lap > slowest {
                    slowest = lap;
                }
                fastest = fastest.shorter(lap);
            }
        }

        let mut percentage = 0.0;
        if runs >= 1 {
            if let (LapTime::Timed(qualify), LapTime::Timed(fastest)) = (qualify, fastest) {
                percentage = fastest.as_secs_f64()
                    / ((slowest.as_secs_f64() + qualify.as_secs_f64()) / 2.0)
                    * 100.0;
            }
        }

        Some(Driver {
            race_number: race_number.to_string(),
            name,
            qualify: qualify.finish(),
            fastest: fastest.finish(),
            slowest,
            percentage,
            runs,
            laps,
            position: 0,
            shared: false,
        })
    }

    /// Midpoint of the slowest race lap and the qualifying lap, in seconds.
    /// The denominator of the score and the "Slow Ave" column in the output.
    pub fn slow_average(&self) -> f64 {
        (self.slowest.as_secs_f64() + self.qualify.as_secs_f64()) / 2.0
    }

    /// The standing as ordinal text: `3rd`, `21st`, `11th`, or `=1st` when
    /// the position is shared.
    pub fn ordinal(&self) -> String {
        let x = self.position;

        let mut suffix = "th";
        match x % 10 {
            1 if x % 100 != 11 => suffix = "st",
            2 if x % 100 != 12 => suffix = "nd",
            3 if x % 100 != 13 => suffix = "rd",
            _ => {}
        }

        if self.shared {
            format!("={x}{suffix}")
        } else {
            format!("{x}{suffix}")
        }
    }
}
