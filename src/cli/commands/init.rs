use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Writes `~/.bikeshare/bikeshare.conf` with default settings. The data
/// directory given with `--data-dir` is stored in it.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.data_dir.clone(), cli.test)?;

    if cli.test {
        println!("⚙️  Test mode: configuration not written ({})", path.display());
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
