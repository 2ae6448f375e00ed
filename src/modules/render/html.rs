use crate::modules::helpers::format::format_lap_time;
use crate::modules::models::standings::RaceResults;
use crate::modules::render::headings as h;

/// Standalone HTML page with the same columns as the text table.
pub fn render(results: &RaceResults) -> String {
    let mut out = format!(
        "<!DOCTYPE html><html lang=en><title>{event}</title>\
         <style>body{{font-family:sans-serif}}h1{{color:#07f;text-align:center}}table{{width:100%}}th{{text-align:left}}</style>\
         <h1>{event}</h1><b>{competitors} {qty}</b>\
         <table><thead><tr><th>{pos}<th>{num}<th>{driver}<th>{qualify}<th>{secs}<th>{fastest}<th>{secs}<th>{slowest}<th>{secs}<th>{slow_ave}<th>{percentage}<th>{runs}<th>{laps}<tbody>",
        event = results.event_name,
        competitors = h::COMPETITORS,
        qty = results.drivers.len(),
        pos = h::POSITION,
        num = h::RACING_NUMBER,
        driver = h::DRIVER,
        qualify = h::QUALIFY,
        secs = h::SECONDS,
        fastest = h::FASTEST,
        slowest = h::SLOWEST,
        slow_ave = h::SLOW_AVERAGE,
        percentage = h::PERCENTAGE,
        runs = h::RUNS,
        laps = h::LAPS,
    );

    for driver in &results.drivers {
        out.push_str(&format!(
            "<tr><td>{}<td>{}<td>{}<td>{}<td>{:.4}<td>{}<td>{:.4}<td>{}<td>{:.4}<td>{:.5}<td>{:.8}<td>{}<td>{}",
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

    out.push_str("</table>");

    if !results.missing.is_empty() {
        out.push_str(&format!(
            "<h3>{}</h3><ul><li>{}</ul>",
            h::MISSING,
            results.missing.join("<li>")
        ));
    }

    out
}
