use std::{fs::File, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use price_tracker_tui::{api::YahooApi, app::App, config::Cli};
use tracing::{Level, debug, subscriber};
use tracing_subscriber::FmtSubscriber;

fn preprocess(log_path: &str, trace_level: Level) -> Result<()> {
    let log_file = File::create(log_path)
        .with_context(|| format!("Failed to create log file at path: {}", log_path))?;

    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .finish();
    subscriber::set_global_default(my_subscriber)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    preprocess(&cli.log_path(), cli.trace.into())?;
    debug!("Command line input recorded: {cli:#?}");

    let api = YahooApi::new(&cli.base_url)?;
    let mut app = App::new(api, cli.initial_form());
    app.run().await?;

    Ok(())
}
