use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use taskdeck::core::{config, snapshot, state::App};

#[derive(Parser)]
#[command(name = "taskdeck", about = "Personal timetable, calendar, and task board")]
struct Args {
    /// Override the snapshot file location
    #[arg(long)]
    data_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize file logger - writes to taskdeck.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("taskdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Taskdeck starting up");

    let config = config::load_config()?;
    let resolved = config::resolve(&config, args.data_file)?;

    // A corrupt snapshot is fatal; missing or empty falls back to defaults.
    let snapshot = snapshot::load(&resolved.data_file)?;

    let now = chrono::Local::now();
    let app = App::from_config(&resolved, snapshot, now.date_naive(), now.time());

    taskdeck::tui::run(app, &resolved.data_file)?;
    Ok(())
}
