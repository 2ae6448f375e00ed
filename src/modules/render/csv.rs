use crate::modules::grammar::DECIMAL_PLACES;
use crate::modules::helpers::format::format_lap_time;
use crate::modules::helpers::math::Math;
use crate::modules::models::standings::RaceResults;
use crate::modules::render::headings as h;

/// Spreadsheet emission. Driver names can't contain commas or quotes, so no
/// field needs escaping.
pub fn render(results: &RaceResults) -> String {
    let mut out = format!("{}\n", results.event_name);

    out.push_str(&format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
        h::POSITION,
        h::RACING_NUMBER,
        h::DRIVER,
        h::QUALIFY,
        h::SECONDS,
        h::FASTEST,
        h::SECONDS,
        h::SLOWEST,
        h::SECONDS,
        h::SLOW_AVERAGE,
        h::PERCENTAGE,
        h::RUNS,
        h::LAPS,
    ));

    let places = DECIMAL_PLACES as i32;
    for driver in &results.drivers {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            driver.ordinal(),
            driver.race_number,
            driver.name,
            format_lap_time(driver.qualify),
            Math::round_float_to_n_decimals(driver.qualify.as_secs_f64(), places),
            format_lap_time(driver.fastest),
            Math::round_float_to_n_decimals(driver.fastest.as_secs_f64(), places),
            format_lap_time(driver.slowest),
            Math::round_float_to_n_decimals(driver.slowest.as_secs_f64(), places),
            Math::round_float_to_n_decimals(driver.slow_average(), places),
            Math::round_float_to_n_decimals(driver.percentage, 8),
            driver.runs,
            driver.laps,
        ));
    }

    if !results.missing.is_empty() {
        out.push_str(&format!("\n{}\n{}\n", h::MISSING, results.missing.join("\n")));
    }

    out
}
