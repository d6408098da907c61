use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::loader;
use crate::core::pager::RowPager;
use crate::data::CsvDirSource;
use crate::errors::AppResult;
use crate::models::filter::FilterSpec;
use crate::ui::messages::info;
use crate::ui::render::render_rows;

/// Handle the `rows` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rows { filter, page } = cmd {
        let spec = FilterSpec::new(filter.city, filter.month, filter.day);
        let source = CsvDirSource::new(cfg.data_path());
        let dataset = loader::load(&source, &spec)?;

        let mut pager = RowPager::at_page(*page);
        let first = pager.offset();
        match pager.next_page(&dataset.records) {
            Some(rows) => print!("{}", render_rows(rows, first)),
            None => info(format!(
                "No more rows to display ({} trips selected, page {} is past the end).",
                dataset.len(),
                page
            )),
        }
    }
    Ok(())
}
