use simple_logger::SimpleLogger;
use std::error::Error;
use transaction_insights::config::Config;
use transaction_insights::engine::QueryEngine;
use transaction_insights::report::{build_report, write_report};

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let config = Config::from_env();
    log::debug!("Resolved configuration: {config:?}");

    log::debug!("Loading transactions: Starting");
    let engine = QueryEngine::load(&config.transactions_path);
    log::debug!("Loading transactions: Done ({} records)", engine.len());

    log::debug!("Running queries: Starting");
    let rows = build_report(&engine, config.client_full_name.as_deref())?;
    log::debug!("Running queries: Done");

    log::debug!("Exporting report to stdout: Started");
    write_report(&rows, std::io::stdout())?;
    log::debug!("Exporting report to stdout: Done");

    log::debug!("Application finished");

    Ok(())
}
