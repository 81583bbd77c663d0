use std::path::PathBuf;

use crate::cli::commands::Cli;
use crate::cli::output::list_json;
use crate::io::{config_io, log};
use crate::model::Config;
use crate::tui::text_input::single_line;
use crate::tui::{self, App};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    log::init_logging(log_path(&cli, &config).as_deref())?;
    let mut app = build_app(&cli, &config);

    tui::run(&mut app)?;

    if cli.json {
        println!("{}", list_json(&app.store)?);
    }
    Ok(())
}

/// Where this session logs: `--log-file` wins over `[log] file`
pub fn log_path(cli: &Cli, config: &Config) -> Option<PathBuf> {
    cli.log_file.clone().or_else(|| config.log.file.clone())
}

/// Build the app for this session, seeded with the command-line items.
///
/// Items go in as the add field would take them: line breaks flattened,
/// blanks dropped.
pub fn build_app(cli: &Cli, config: &Config) -> App {
    let mut app = App::new(config);
    for item in &cli.items {
        if let Err(err) = app.store.add(&single_line(item)) {
            tracing::info!(error = %err, "skipped command-line item");
        }
    }
    app
}
