use std::process::Command;

use log::error;

/// Opens a URL in the platform's default browser. Failure is logged, never
/// fatal: the user can always open the page themselves.
pub fn open_browser(url: &str) {
    #[cfg(target_os = "linux")]
    let result = Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", url]).spawn();

    if let Err(err) = result {
        error!(target: "browser", "unable to open a web browser for {url}: {err}");
    }
}
