// Column headings shared by the text, HTML and CSV outputs.

pub const POSITION: &str = "Pos";
pub const RACING_NUMBER: &str = "#";
pub const DRIVER: &str = "Driver";
pub const QUALIFY: &str = "Qualify";
pub const FASTEST: &str = "Fastest";
pub const SLOWEST: &str = "Slowest";
pub const SLOW_AVERAGE: &str = "Slow Ave";
pub const PERCENTAGE: &str = "Percentage";
pub const RUNS: &str = "Runs";
pub const LAPS: &str = "Laps";
pub const SECONDS: &str = "Secs";
pub const MISSING: &str = "Missing:";
pub const COMPETITORS: &str = "Competitors:";
