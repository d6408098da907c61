use crate::config::Config;
use crate::core::session::{Session, StdinPrompter};
use crate::data::CsvDirSource;
use crate::errors::AppResult;
use std::io;
use tracing::info;

/// Handle the interactive explorer (default when no subcommand is given)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let source = CsvDirSource::new(cfg.data_path());
    info!(data_dir = %source.dir().display(), "Starting interactive session");

    let stdout = io::stdout();
    let mut session = Session::new(&source, cfg, StdinPrompter, stdout.lock());
    session.run()
}
