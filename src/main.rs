use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tripboard::InitialSort;
use tripboard::core::config::{self, CliOverrides, TripboardConfig};
use tripboard::core::trip_file;

#[derive(Parser)]
#[command(name = "tripboard", about = "Plan a trip from the terminal")]
struct Args {
    /// JSON trip file (uses a built-in sample trip when omitted)
    #[arg(short, long)]
    trip: Option<PathBuf>,

    /// Initial sort order
    #[arg(short, long, value_enum)]
    sort: Option<InitialSort>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (TripboardConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        trip_file: args.trip,
        sort: args.sort.map(Into::into),
    };
    let resolved = config::resolve(&file_config, &cli);

    // Stdout belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Tripboard starting up (sort: {}, trip: {:?})",
        resolved.default_sort.label(),
        resolved.trip_file
    );

    let events = trip_file::load_or_sample(resolved.trip_file.as_deref()).map_err(|e| {
        log::warn!("Could not load trip: {}", e);
        std::io::Error::other(e)
    })?;

    tripboard::tui::run(resolved, events)
}
