use std::time::Duration;

use crate::modules::grammar::DECIMAL_PLACES;

/// Formats a lap duration back into the `m:ss.ffff` layout the timing dumps
/// use, so rendered tables read like the source material.
pub fn format_lap_time(lap: Duration) -> String {
    let total = lap.as_secs_f64();
    let minutes = (total / 60.0).floor() as u64;
    let seconds = total - minutes as f64 * 60.0;

    format!(
        "{minutes}:{seconds:0width$.places$}",
        width = DECIMAL_PLACES + 3,
        places = DECIMAL_PLACES
    )
}
