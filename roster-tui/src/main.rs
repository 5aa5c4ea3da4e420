mod app;
mod columns;
mod data;

use std::fs::File;

use gridtui::Runtime;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use app::RosterApp;

#[tokio::main]
async fn main() {
    // Raw-mode terminals cannot log to stdout; write to a file instead.
    if let Ok(log_file) = File::create("roster-tui.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    if let Err(e) = Runtime::new().run(RosterApp::new()).await {
        eprintln!("Error: {e}");
    }
}
