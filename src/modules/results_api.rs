use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;
use snafu::{ensure, ResultExt};

use crate::errors::{
    FetchResultsSnafu, InvalidResultsUrlSnafu, ReadResultsSnafu, Result, WriteResultsSnafu,
};

/// Where the timing service publishes event results.
pub const RESULTS_URL: &str = "http://racing.natsoft.com.au/results/";

const RESULTS_HOST: &str = "racing.natsoft.com.au";

/// Resolves a results argument: URLs are fetched from the timing service,
/// anything else is read as a local file.
pub fn acquire(arg: &str) -> Result<String> {
    let arg = arg.trim();
    if arg.starts_with("http://") || arg.starts_with("https://") {
        fetch_results(arg)
    } else {
        load_results_file(Path::new(arg))
    }
}

pub fn load_results_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(ReadResultsSnafu { path })
}

/// Fetches raw results from the timing service. Only http(s) URLs on the
/// service's host are attempted.
pub fn fetch_results(url: &str) -> Result<String> {
    ensure!(is_results_url(url), InvalidResultsUrlSnafu { url });

    info!(target: "results_api", "fetching results from {url}");
    reqwest::blocking::get(url)
        .and_then(|response| response.text())
        .context(FetchResultsSnafu { url })
}

pub fn is_results_url(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://")) && url.contains(RESULTS_HOST)
}

/// Today's raw-dump snapshot file, so a run can be reproduced later in the day.
pub fn snapshot_path() -> PathBuf {
    PathBuf::from(Local::now().format("event-%Y-%m-%d.txt").to_string())
}

pub fn save_snapshot(src: &str) -> Result<PathBuf> {
    let path = snapshot_path();
    fs::write(&path, src).context(WriteResultsSnafu { path: &path })?;
    info!(target: "results_api", "raw results saved to {}", path.display());
    Ok(path)
}
