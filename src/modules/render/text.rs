use crate::modules::helpers::format::format_lap_time;
use crate::modules::models::standings::RaceResults;
use crate::modules::render::headings as h;

/// Fixed-width standings table. Printed to the terminal and saved alongside
/// the HTML and CSV outputs.
pub fn render(results: &RaceResults) -> String {
    let width = results.longest_name_len.max(h::DRIVER.len());

    let mut out = format!("   {}\n{} {}\n", results.event_name, h::COMPETITORS, results.drivers.len());
    out.push_str(&format!(
        "{:<5}  {:>4} {:<width$}  {:<10}    {:<8}    {:<10}    {:<8}    {:<10}    {:<8}    {:<9}    {:<11}    {:>4}    {:>4}\n",
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

    for driver in &results.drivers {
        out.push_str(&format!(
            "{:<5}  {:>4} {:<width$}  {:<10}    {:<8.4}    {:<10}    {:<8.4}    {:<10}    {:<8.4}    {:>9.5}    {:>11.8}    {:>4}    {:>4}\n",
            driver.ordinal(),
            driver.race_number,
            driver.name,
            format_lap_time(driver.qualify),
            driver.qualify.as_secs_f64(),
            format_lap_time(driver.fastest),
            driver.fastest.as_secs_f64(),
            format_lap_time(driver.slowest),
            driver.slowest.as_secs_f64(),
            driver.slow_average(),
            driver.percentage,
            driver.runs,
            driver.laps,
        ));
    }

    if !results.missing.is_empty() {
        out.push_str(&format!("\n{}\n{}\n", h::MISSING, results.missing.join("\n")));
    }

    out
}
