use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "td", about = concat!("[x] todos v", env!("CARGO_PKG_VERSION"), " - a todo list for this session"), version)]
pub struct Cli {
    /// Items to start the list with
    #[arg(value_name = "TEXT")]
    pub items: Vec<String>,

    /// Config file (default: the platform config dir, todos/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append warnings to this file (overrides [log] file)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the final list as JSON on exit
    #[arg(long)]
    pub json: bool,
}
