use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

/// Plain-text fmt subscriber writing to `writer`. No ANSI codes and no
/// targets, so the lines read the same in a file as in a test buffer.
pub fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(writer)
        .finish()
}

/// Route `tracing` events to `path` for this session.
///
/// Without a path nothing is installed and events are dropped: the terminal
/// belongs to the TUI, so there is no stderr fallback.
pub fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = open_append(path)?;
    // A subscriber may already be installed (tests, embedding); keep it
    let _ = tracing::subscriber::set_global_default(subscriber(Mutex::new(file)));
    Ok(())
}

/// Open `path` for appending, creating it and its parent directories
fn open_append(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
