use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A lap token matched the grammar but could not be converted to a
    /// duration. Recoverable: the builder skips the token and keeps walking.
    #[snafu(display("malformed lap time token: {token}"))]
    MalformedLapTime { token: String },

    #[snafu(display("failed to read results from {}: {source}", path.display()))]
    ReadResults {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteResults {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to fetch results from {url}: {source}"))]
    FetchResults { url: String, source: reqwest::Error },

    #[snafu(display("not a usable results url: {url}"))]
    InvalidResultsUrl { url: String },

    #[snafu(display("failed to set up logging: {source}"))]
    Logging { source: fern::InitError },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
