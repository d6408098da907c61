use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::loader;
use crate::core::logic::Core;
use crate::data::CsvDirSource;
use crate::errors::AppResult;
use crate::models::filter::FilterSpec;
use crate::ui::messages::{info, warning};
use crate::ui::render::render_full_report;

/// Handle the `stats` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { filter, format } = cmd {
        let spec = FilterSpec::new(filter.city, filter.month, filter.day);
        let source = CsvDirSource::new(cfg.data_path());
        let dataset = loader::load(&source, &spec)?;

        if dataset.is_empty() {
            warning(format!("No trips match this filter combination ({spec})."));
            return Ok(());
        }

        let report = Core::build_full_report(&spec, &dataset)?;

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Table => {
                info(format!("{} trips selected ({spec})", dataset.len()));
                print!("{}", render_full_report(&report, spec.city.title(), cfg));
            }
        }
    }
    Ok(())
}
