use std::path::{Path, PathBuf};
use std::{env, fs, io, process};

use chrono::Local;
use clap::Parser;
use log::{error, info};
use snafu::ResultExt;

use triumph_challenge_analytics::errors::{Result, WriteResultsSnafu};
use triumph_challenge_analytics::modules::helpers::browser;
use triumph_challenge_analytics::modules::helpers::logging::setup_logging;
use triumph_challenge_analytics::modules::models::roster::Roster;
use triumph_challenge_analytics::modules::models::standings::{build_standings, RaceResults};
use triumph_challenge_analytics::modules::render;
use triumph_challenge_analytics::modules::{grammar, results_api};

const DEFAULT_CHAMPIONSHIP: &str = "All Triumph Challenge";
const COMPETITORS_FILE: &str = "competitors.txt";

const HELP: &str = "Instructions to use:
    Open the racing results for the event at http://racing.natsoft.com.au/results/

    Select all of the individual lap times and copy them.
    Run this program and paste the results in.
    Type in all the competitors racing numbers that are in the event, each separated by a space.
    Press Enter
    Results will be generated in the same folder in CSV, HTML and text format.";

/// Turns a raw lap-timing results dump into ranked championship standings.
#[derive(Parser, Debug)]
#[command(about, long_about = HELP)]
struct Args {
    /// Path or URL of the results dump. Falls back to today's snapshot file,
    /// then to pasting into standard input.
    results: Option<String>,

    /// File holding the racing numbers entered for the event.
    #[arg(long, default_value = COMPETITORS_FILE)]
    competitors: PathBuf,

    /// Championship name prefixed to the event title. Defaults to the
    /// CHAMPIONSHIP environment variable when set.
    #[arg(long)]
    championship: Option<String>,

    /// Also write the standings as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = setup_logging() {
        eprintln!("{err}");
    }

    let championship = args
        .championship
        .clone()
        .or_else(|| env::var("CHAMPIONSHIP").ok())
        .unwrap_or_else(|| DEFAULT_CHAMPIONSHIP.to_string());

    println!("{championship}");

    let roster = load_roster(&args.competitors);
    let src = get_event_results(args.results.as_deref());

    let results = build_standings(&src, &roster, &championship);

    if let Err(err) = write_outputs(&results, args.json) {
        error!(target: "main", "{err}");
        process::exit(1);
    }
}

/// Loads the entered racing numbers, prompting on standard input (and saving
/// the answer) when the competitors file is absent or empty.
fn load_roster(path: &Path) -> Roster {
    if let Ok(src) = fs::read_to_string(path) {
        let roster = Roster::parse(&src);
        if !roster.is_empty() {
            println!("Using the list of competitors in {}", path.display());
            return roster;
        }
    }

    println!("Please enter racing numbers separated by a space.");
    loop {
        let roster = Roster::parse(&input());
        if !roster.is_empty() {
            if let Err(err) = fs::write(path, roster.to_line()) {
                error!(target: "main", "failed to save {}: {err}", path.display());
            }
            return roster;
        }
    }
}

/// Finds the raw results: the explicit argument first, then today's snapshot
/// file, then standard input (where a pasted dump, a file path or a results
/// URL are all accepted). A dump that arrives via stdin or URL is
/// snapshotted for reruns.
fn get_event_results(results_arg: Option<&str>) -> String {
    if let Some(arg) = results_arg {
        match results_api::acquire(arg) {
            Ok(src) if grammar::contains_results(&src) => {
                println!("Using the results from {arg}");
                return src;
            }
            Ok(_) => error!(target: "main", "no competitor lap times found in {arg}"),
            Err(err) => error!(target: "main", "{err}"),
        }
    }

    let snapshot = results_api::snapshot_path();
    if let Ok(src) = fs::read_to_string(&snapshot) {
        if grammar::contains_results(&src) {
            println!("Using the results from {}", snapshot.display());
            return src;
        }
    }

    println!(
        "\nNo results found in {} . Please copy event results from {}",
        snapshot.display(),
        results_api::RESULTS_URL
    );
    println!("Do you want to open the results website in your default browser? [ y / n ]");
    if yes(&input()) {
        browser::open_browser(results_api::RESULTS_URL);
    }

    loop {
        let line = input();

        if grammar::contains_results(&line) {
            if let Err(err) = results_api::save_snapshot(&line) {
                error!(target: "main", "{err}");
            }
            return line;
        }

        // Maybe a file path or URL was pasted instead of the results themselves.
        if let Ok(src) = results_api::acquire(&line) {
            if grammar::contains_results(&src) {
                println!("Using the results from {line}");
                if let Err(err) = results_api::save_snapshot(&src) {
                    error!(target: "main", "{err}");
                }
                return src;
            }
        }
    }
}

/// Prints the text standings and writes the timestamped output files.
fn write_outputs(results: &RaceResults, json: bool) -> Result<()> {
    let txt = render::text::render(results);
    print!("{txt}");

    let stem = Local::now().format("results-%Y-%m-%d %H;%M;%S").to_string();

    write_file(format!("{stem}.txt"), txt)?;
    write_file(format!("{stem}.html"), render::html::render(results))?;
    write_file(format!("{stem}.csv"), render::csv::render(results))?;

    if json {
        match serde_json::to_string_pretty(results) {
            Ok(body) => write_file(format!("{stem}.json"), body)?,
            Err(err) => error!(target: "main", "failed to serialize standings: {err}"),
        }
    }

    info!(target: "main", "results written as {stem}");
    Ok(())
}

fn write_file(path: String, contents: String) -> Result<()> {
    let path = PathBuf::from(path);
    fs::write(&path, contents).context(WriteResultsSnafu { path: &path })
}

/// Reads one trimmed line from standard input, honouring the exit words.
fn input() -> String {
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        process::exit(1);
    }

    let line = line.trim().to_string();
    match line.to_lowercase().as_str() {
        "x" | "exit" | "q" | "quit" | "s" | "stop" | "h" | "halt" | "bye" | "goodbye" => {
            process::exit(1)
        }
        _ => line,
    }
}

fn yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
