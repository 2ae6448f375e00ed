pub mod grammar;
pub mod results_api;

pub mod models {
    pub mod driver;
    pub mod roster;
    pub mod standings;
}

pub mod helpers {
    pub mod browser;
    pub mod format;
    pub mod logging;
    pub mod math;
}

pub mod render {
    pub mod csv;
    pub mod headings;
    pub mod html;
    pub mod text;
}
